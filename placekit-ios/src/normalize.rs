//! `GmsPlace` to canonical [`Place`].

use placekit_core::{AddressComponents, Location, NativeRecord, Place, Viewport};

use crate::{CoordinateBounds, CoordinateDegrees, GmsPlace};

/// Normalize an iOS place record.
///
/// Fields are copied as-is. The viewport and address components are set only
/// when the record has them; components are inserted in SDK order, so a
/// repeated component type keeps its last value.
///
/// # Examples
///
/// ```
/// use placekit_ios::{CoordinateDegrees, GmsPlace, normalize};
///
/// let record = GmsPlace {
///     name: "Museum".into(),
///     place_id: "abc".into(),
///     formatted_address: None,
///     attributions: None,
///     types: vec!["museum".into()],
///     coordinate: CoordinateDegrees { latitude: 51.5, longitude: -0.1 },
///     viewport: None,
///     address_components: None,
/// };
/// let place = normalize(&record);
/// assert_eq!(place.id, "abc");
/// assert!(place.viewport.is_none());
/// ```
#[must_use]
pub fn normalize(place: &GmsPlace) -> Place {
    Place {
        id: place.place_id.clone(),
        name: place.name.clone(),
        address: place.formatted_address.clone(),
        attributions: place.attributions.clone(),
        types: place.types.clone(),
        coordinates: location(place.coordinate),
        viewport: place.viewport.map(|bounds| {
            Viewport::new(location(bounds.south_west), location(bounds.north_east))
        }),
        address_components: place.address_components.as_ref().map(|components| {
            components
                .iter()
                .map(|component| (component.kind.clone(), component.name.clone()))
                .collect::<AddressComponents>()
        }),
    }
}

/// Native picker bounds for a requested viewport.
#[must_use]
pub const fn coordinate_bounds(viewport: &Viewport) -> CoordinateBounds {
    CoordinateBounds {
        north_east: degrees(viewport.north_east),
        south_west: degrees(viewport.south_west),
    }
}

const fn location(coordinate: CoordinateDegrees) -> Location {
    Location::new(coordinate.latitude, coordinate.longitude)
}

const fn degrees(location: Location) -> CoordinateDegrees {
    CoordinateDegrees {
        latitude: location.latitude,
        longitude: location.longitude,
    }
}

impl NativeRecord for GmsPlace {
    fn normalize(&self) -> Place {
        normalize(self)
    }
}
