//! `AndroidPlace` to canonical [`Place`].

use placekit_core::{AddressComponents, Location, NativeRecord, Place, Viewport};

use crate::{AndroidPlace, LatLng, LatLngBounds};

/// Normalize an Android place record.
///
/// Place types are flattened to their lower snake_case names. Every type
/// listed on an address component maps to that component's `name`; when two
/// components share a type the later one wins. The viewport and components
/// are set only when the record has them.
///
/// # Examples
///
/// ```
/// use placekit_android::{AndroidPlace, LatLng, PlaceType, normalize};
///
/// let record = AndroidPlace {
///     id: "abc".into(),
///     name: "Louvre".into(),
///     address: None,
///     attributions: None,
///     place_types: vec![PlaceType::Museum],
///     lat_lng: LatLng { latitude: 48.86, longitude: 2.34 },
///     viewport: None,
///     address_components: None,
/// };
/// let place = normalize(&record);
/// assert_eq!(place.types, vec!["museum".to_owned()]);
/// ```
#[must_use]
pub fn normalize(place: &AndroidPlace) -> Place {
    Place {
        id: place.id.clone(),
        name: place.name.clone(),
        address: place.address.clone(),
        attributions: place.attributions.clone(),
        types: place.place_types.iter().map(|kind| kind.wire_name()).collect(),
        coordinates: location(place.lat_lng),
        viewport: place
            .viewport
            .map(|bounds| Viewport::new(location(bounds.southwest), location(bounds.northeast))),
        address_components: place.address_components.as_ref().map(|components| {
            components
                .iter()
                .flat_map(|component| {
                    component
                        .types
                        .iter()
                        .map(|kind| (kind.clone(), component.name.clone()))
                })
                .collect::<AddressComponents>()
        }),
    }
}

/// Native picker bounds for a requested viewport.
#[must_use]
pub const fn lat_lng_bounds(viewport: &Viewport) -> LatLngBounds {
    LatLngBounds {
        southwest: lat_lng(viewport.south_west),
        northeast: lat_lng(viewport.north_east),
    }
}

const fn location(lat_lng: LatLng) -> Location {
    Location::new(lat_lng.latitude, lat_lng.longitude)
}

const fn lat_lng(location: Location) -> LatLng {
    LatLng {
        latitude: location.latitude,
        longitude: location.longitude,
    }
}

impl NativeRecord for AndroidPlace {
    fn normalize(&self) -> Place {
        normalize(self)
    }
}
