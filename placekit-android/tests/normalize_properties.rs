//! Property-based tests for Android record normalization.
//!
//! # Invariants tested
//!
//! - **Types:** one lower snake_case entry per native place type, in order.
//! - **Components:** every type on every component is present and maps to the
//!   name of the last component carrying it.
//! - **Viewport:** present exactly when the record has one.

use std::collections::BTreeMap;

use proptest::prelude::*;
use placekit_android::{AddressComponent, AndroidPlace, LatLng, LatLngBounds, PlaceType, normalize};

fn lat_lng_strategy() -> impl Strategy<Value = LatLng> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(latitude, longitude)| LatLng { latitude, longitude })
}

fn place_type_strategy() -> impl Strategy<Value = PlaceType> {
    prop_oneof![
        prop::sample::select(vec!["MUSEUM", "PARK", "CAFE", "POINT_OF_INTEREST"])
            .prop_map(PlaceType::from_native),
        "[A-Z]{1,8}(_[A-Z]{1,8})?".prop_map(|name| PlaceType::from_native(&name)),
    ]
}

fn component_strategy() -> impl Strategy<Value = AddressComponent> {
    (
        "[A-Za-z ]{1,12}",
        proptest::collection::vec(
            prop::sample::select(vec!["locality", "political", "country", "route"]),
            0..3,
        ),
    )
        .prop_map(|(name, types)| AddressComponent {
            name,
            short_name: None,
            types: types.into_iter().map(str::to_owned).collect(),
        })
}

fn place_strategy() -> impl Strategy<Value = AndroidPlace> {
    (
        "[A-Za-z0-9_-]{1,27}",
        proptest::collection::vec(place_type_strategy(), 0..5),
        lat_lng_strategy(),
        proptest::option::of((lat_lng_strategy(), lat_lng_strategy())),
        proptest::option::of(proptest::collection::vec(component_strategy(), 0..6)),
    )
        .prop_map(|(id, place_types, lat_lng, corners, address_components)| AndroidPlace {
            name: format!("Place {id}"),
            id,
            address: None,
            attributions: None,
            place_types,
            lat_lng,
            viewport: corners.map(|(southwest, northeast)| LatLngBounds { southwest, northeast }),
            address_components,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn types_are_lowercased_in_order(record in place_strategy()) {
        let place = normalize(&record);
        let expected: Vec<String> = record
            .place_types
            .iter()
            .map(|kind| kind.native_name().to_ascii_lowercase())
            .collect();
        prop_assert_eq!(place.types, expected);
    }

    #[test]
    fn components_map_every_type_to_the_last_name(record in place_strategy()) {
        let place = normalize(&record);
        let expected = record.address_components.as_ref().map(|components| {
            let mut map = BTreeMap::new();
            for component in components {
                for kind in &component.types {
                    map.insert(kind.clone(), component.name.clone());
                }
            }
            map
        });
        prop_assert_eq!(place.address_components, expected);
    }

    #[test]
    fn viewport_presence_follows_the_record(record in place_strategy()) {
        let place = normalize(&record);
        prop_assert_eq!(place.viewport.is_some(), record.viewport.is_some());
    }
}
