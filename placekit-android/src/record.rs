//! Value copies of Android places SDK objects.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `LatLng`: a coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// `LatLngBounds`: a rectangle given by two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLngBounds {
    /// South-west corner.
    pub southwest: LatLng,
    /// North-east corner.
    pub northeast: LatLng,
}

/// `Place.Type`: the SDK's place category enum.
///
/// Only the categories this crate names explicitly get a variant; every other
/// constant is carried verbatim in [`PlaceType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PlaceType {
    /// `AIRPORT`
    Airport,
    /// `CAFE`
    Cafe,
    /// `ESTABLISHMENT`
    Establishment,
    /// `LOCALITY`
    Locality,
    /// `MUSEUM`
    Museum,
    /// `PARK`
    Park,
    /// `POINT_OF_INTEREST`
    PointOfInterest,
    /// `POLITICAL`
    Political,
    /// `RESTAURANT`
    Restaurant,
    /// `TOURIST_ATTRACTION`
    TouristAttraction,
    /// Any other constant, by its native name.
    Other(String),
}

impl PlaceType {
    /// Map a native constant name such as `"POINT_OF_INTEREST"`.
    #[must_use]
    pub fn from_native(name: &str) -> Self {
        match name {
            "AIRPORT" => Self::Airport,
            "CAFE" => Self::Cafe,
            "ESTABLISHMENT" => Self::Establishment,
            "LOCALITY" => Self::Locality,
            "MUSEUM" => Self::Museum,
            "PARK" => Self::Park,
            "POINT_OF_INTEREST" => Self::PointOfInterest,
            "POLITICAL" => Self::Political,
            "RESTAURANT" => Self::Restaurant,
            "TOURIST_ATTRACTION" => Self::TouristAttraction,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Native constant name.
    #[must_use]
    pub fn native_name(&self) -> &str {
        match self {
            Self::Airport => "AIRPORT",
            Self::Cafe => "CAFE",
            Self::Establishment => "ESTABLISHMENT",
            Self::Locality => "LOCALITY",
            Self::Museum => "MUSEUM",
            Self::Park => "PARK",
            Self::PointOfInterest => "POINT_OF_INTEREST",
            Self::Political => "POLITICAL",
            Self::Restaurant => "RESTAURANT",
            Self::TouristAttraction => "TOURIST_ATTRACTION",
            Self::Other(name) => name,
        }
    }

    /// Lower snake_case name used in canonical places, e.g. `"point_of_interest"`.
    #[must_use]
    pub fn wire_name(&self) -> String {
        self.native_name().to_ascii_lowercase()
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

impl From<String> for PlaceType {
    fn from(name: String) -> Self {
        Self::from_native(&name)
    }
}

impl From<PlaceType> for String {
    fn from(kind: PlaceType) -> Self {
        match kind {
            PlaceType::Other(name) => name,
            known => known.native_name().to_owned(),
        }
    }
}

/// `AddressComponent`: one address part tagged with one or more types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AddressComponent {
    /// Full value.
    pub name: String,
    /// Abbreviated value, when the SDK has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub short_name: Option<String>,
    /// Component types, for example `["locality", "political"]`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
}

/// `Place`: a place as reported by the Android SDK.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AndroidPlace {
    /// Place identifier.
    pub id: String,
    /// Place name.
    pub name: String,
    /// Formatted address, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: Option<String>,
    /// Attribution text that must be displayed with the place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributions: Option<String>,
    /// Place categories.
    #[cfg_attr(feature = "serde", serde(default, rename = "types"))]
    pub place_types: Vec<PlaceType>,
    /// Position of the place.
    pub lat_lng: LatLng,
    /// Recommended viewport.
    #[cfg_attr(feature = "serde", serde(default))]
    pub viewport: Option<LatLngBounds>,
    /// Address components in SDK order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address_components: Option<Vec<AddressComponent>>,
}
