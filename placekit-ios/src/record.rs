//! Value copies of iOS places SDK objects.
//!
//! Field names follow the SDK's property names when serialised so that
//! records captured from a device can be replayed from JSON.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `CLLocationCoordinate2D`: a coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateDegrees {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// `GMSCoordinateBounds`: a rectangle given by two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoordinateBounds {
    /// North-east corner.
    pub north_east: CoordinateDegrees,
    /// South-west corner.
    pub south_west: CoordinateDegrees,
}

/// `GMSAddressComponent`: one typed component of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GmsAddressComponent {
    /// Component type, for example `"locality"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Component value.
    pub name: String,
}

/// `GMSPlace`: a place as reported by the iOS SDK.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GmsPlace {
    /// Place name.
    pub name: String,
    /// Place identifier.
    #[cfg_attr(feature = "serde", serde(rename = "placeID"))]
    pub place_id: String,
    /// Formatted address, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub formatted_address: Option<String>,
    /// Attribution text that must be displayed with the place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributions: Option<String>,
    /// Place type tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
    /// Position of the place.
    pub coordinate: CoordinateDegrees,
    /// Recommended viewport.
    #[cfg_attr(feature = "serde", serde(default))]
    pub viewport: Option<CoordinateBounds>,
    /// Address components in SDK order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address_components: Option<Vec<GmsAddressComponent>>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialises_sdk_property_names() {
        let place: GmsPlace = serde_json::from_str(
            r#"{
                "name": "Sydney Opera House",
                "placeID": "ChIJ3S-JXmauEmsRUcIaWtf4MzE",
                "coordinate": {"latitude": -33.8568, "longitude": 151.2153},
                "viewport": {
                    "northEast": {"latitude": -33.85, "longitude": 151.22},
                    "southWest": {"latitude": -33.86, "longitude": 151.21}
                },
                "addressComponents": [{"type": "locality", "name": "Sydney"}]
            }"#,
        )
        .expect("valid GMSPlace JSON");
        assert_eq!(place.place_id, "ChIJ3S-JXmauEmsRUcIaWtf4MzE");
        assert_eq!(place.formatted_address, None);
        assert!(place.types.is_empty());
        let components = place.address_components.expect("components present");
        assert_eq!(components[0].kind, "locality");
    }
}
