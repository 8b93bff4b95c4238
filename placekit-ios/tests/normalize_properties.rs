//! Property-based tests for iOS record normalization.
//!
//! # Invariants tested
//!
//! - **Identity:** id, name and coordinates are copied unchanged.
//! - **Viewport:** present exactly when the record has one, corners mirrored.
//! - **Components:** one entry per distinct type, holding the last value seen.

use std::collections::BTreeMap;

use proptest::prelude::*;
use placekit_core::Location;
use placekit_ios::{CoordinateBounds, CoordinateDegrees, GmsAddressComponent, GmsPlace, normalize};

fn degrees_strategy() -> impl Strategy<Value = CoordinateDegrees> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(latitude, longitude)| CoordinateDegrees { latitude, longitude })
}

fn bounds_strategy() -> impl Strategy<Value = CoordinateBounds> {
    (degrees_strategy(), degrees_strategy())
        .prop_map(|(north_east, south_west)| CoordinateBounds { north_east, south_west })
}

fn component_strategy() -> impl Strategy<Value = GmsAddressComponent> {
    // A small type alphabet forces repeated types.
    (
        prop::sample::select(vec!["locality", "country", "route", "postal_code"]),
        "[A-Za-z ]{1,12}",
    )
        .prop_map(|(kind, name)| GmsAddressComponent {
            kind: kind.to_owned(),
            name,
        })
}

fn place_strategy() -> impl Strategy<Value = GmsPlace> {
    (
        "[A-Za-z0-9_-]{1,27}",
        "[A-Za-z ]{1,20}",
        degrees_strategy(),
        proptest::option::of(bounds_strategy()),
        proptest::option::of(proptest::collection::vec(component_strategy(), 0..8)),
    )
        .prop_map(
            |(place_id, name, coordinate, viewport, address_components)| GmsPlace {
                name,
                place_id,
                formatted_address: None,
                attributions: None,
                types: Vec::new(),
                coordinate,
                viewport,
                address_components,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identity_fields_are_copied(record in place_strategy()) {
        let place = normalize(&record);
        prop_assert_eq!(&place.id, &record.place_id);
        prop_assert_eq!(&place.name, &record.name);
        prop_assert_eq!(
            place.coordinates,
            Location::new(record.coordinate.latitude, record.coordinate.longitude)
        );
    }

    #[test]
    fn viewport_mirrors_record_bounds(record in place_strategy()) {
        let place = normalize(&record);
        match (record.viewport, place.viewport) {
            (None, None) => {}
            (Some(bounds), Some(viewport)) => {
                prop_assert_eq!(viewport.north_east.latitude, bounds.north_east.latitude);
                prop_assert_eq!(viewport.north_east.longitude, bounds.north_east.longitude);
                prop_assert_eq!(viewport.south_west.latitude, bounds.south_west.latitude);
                prop_assert_eq!(viewport.south_west.longitude, bounds.south_west.longitude);
            }
            (expected, actual) => {
                prop_assert!(false, "viewport mismatch: {expected:?} vs {actual:?}");
            }
        }
    }

    #[test]
    fn components_keep_the_last_value_per_type(record in place_strategy()) {
        let place = normalize(&record);
        let expected = record.address_components.as_ref().map(|components| {
            let mut map = BTreeMap::new();
            for component in components {
                map.insert(component.kind.clone(), component.name.clone());
            }
            map
        });
        prop_assert_eq!(place.address_components, expected);
    }
}
