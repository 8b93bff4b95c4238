//! Canonical place records shared by every platform adapter.
//!
//! Native SDKs disagree on field names and container shapes; the types here
//! are the single schema callers see. Values are plain copies and never point
//! back into native memory.

use std::collections::BTreeMap;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Address component values keyed by their native component type.
///
/// Keys use the native SDK's vocabulary (for example `"locality"`). The map
/// keeps keys unique; normalizers insert in native order so the last
/// component of a given type wins.
pub type AddressComponents = BTreeMap<String, String>;

/// A WGS84 position in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placekit_core::Location;
///
/// let location = Location::new(51.5, -0.1);
/// let coord: Coord<f64> = location.into();
/// assert_eq!(coord, Coord { x: -0.1, y: 51.5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        Self {
            x: location.longitude,
            y: location.latitude,
        }
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

/// A bounding box expressed by its south-west and north-east corners.
///
/// Corners are carried as supplied. Nothing checks that `south_west` is
/// actually south-west of `north_east`; that is the native SDK's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Viewport {
    /// South-west corner.
    pub south_west: Location,
    /// North-east corner.
    pub north_east: Location,
}

impl Viewport {
    /// Construct a viewport from its corners.
    #[must_use]
    pub const fn new(south_west: Location, north_east: Location) -> Self {
        Self {
            south_west,
            north_east,
        }
    }
}

/// A place returned by the picker or by an id lookup.
///
/// `coordinates` is the only mandatory geolocation. `viewport` and
/// `address_components` are present only when the native record carried
/// them; serialisation omits them otherwise.
///
/// # Examples
/// ```
/// use placekit_core::{Location, Place};
///
/// let place = Place::new("abc", "Museum", Location::new(51.5, -0.1));
/// assert!(place.viewport.is_none());
/// assert!(place.address_components.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Place {
    /// Identifier in the producing SDK's namespace.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formatted address.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub address: Option<String>,
    /// Attribution text the SDK requires to be shown alongside the place.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub attributions: Option<String>,
    /// Category tags in the producing SDK's vocabulary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
    /// Position of the place.
    pub coordinates: Location,
    /// Recommended viewport for displaying the place.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub viewport: Option<Viewport>,
    /// Address components keyed by component type.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub address_components: Option<AddressComponents>,
}

impl Place {
    /// Construct a place with only its mandatory fields populated.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Location) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            attributions: None,
            types: Vec::new(),
            coordinates,
            viewport: None,
            address_components: None,
        }
    }
}
