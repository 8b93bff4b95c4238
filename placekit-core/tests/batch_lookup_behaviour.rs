//! Behavioural tests for sequential, fail-fast lookups by id.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

use placekit_core::lookup::get_places_by_id;
use placekit_core::test_support::{StubPlacesSdk, StubRecord};
use placekit_core::{Location, NativeError, Place, PlacesError};

type SdkCell = RefCell<Option<StubPlacesSdk>>;
type ResultCell = RefCell<Result<Vec<Place>, PlacesError>>;

#[fixture]
fn sdk() -> SdkCell {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(Ok(Vec::new()))
}

fn record(id: &str) -> StubRecord {
    StubRecord::new(id, Location::new(0.0, 0.0))
}

fn not_found() -> NativeError {
    NativeError::new("com.google.places", 9011, "NOT_FOUND")
}

fn look_up(sdk: &SdkCell, result: &ResultCell, ids: &[&str]) {
    let guard = sdk.borrow();
    let stub = guard.as_ref().expect("sdk must be initialised");
    let ids: Vec<String> = ids.iter().map(|&id| id.to_owned()).collect();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build");
    *result.borrow_mut() = runtime.block_on(get_places_by_id(stub, &ids));
}

// --- Given steps ---

#[given("a places SDK knowing X and Y")]
fn sdk_knowing_x_and_y(#[from(sdk)] sdk: &SdkCell) {
    *sdk.borrow_mut() = Some(
        StubPlacesSdk::default()
            .with_place(record("X"))
            .with_place(record("Y")),
    );
}

#[given("a places SDK knowing A and C but failing B")]
fn sdk_failing_b(#[from(sdk)] sdk: &SdkCell) {
    *sdk.borrow_mut() = Some(
        StubPlacesSdk::default()
            .with_place(record("A"))
            .with_failure("B", not_found())
            .with_place(record("C")),
    );
}

// --- When steps ---

#[when("I look up Y then X")]
fn look_up_y_then_x(#[from(sdk)] sdk: &SdkCell, #[from(result)] result: &ResultCell) {
    look_up(sdk, result, &["Y", "X"]);
}

#[when("I look up A, B and C")]
fn look_up_a_b_c(#[from(sdk)] sdk: &SdkCell, #[from(result)] result: &ResultCell) {
    look_up(sdk, result, &["A", "B", "C"]);
}

#[when("I look up no places")]
fn look_up_nothing(#[from(sdk)] sdk: &SdkCell, #[from(result)] result: &ResultCell) {
    look_up(sdk, result, &[]);
}

// --- Then steps ---

#[then("places Y and X are returned in that order")]
fn then_ordered(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let places = borrowed.as_ref().expect("expected Ok result");
    let ids: Vec<&str> = places.iter().map(|place| place.id.as_str()).collect();
    assert_eq!(ids, ["Y", "X"]);
}

#[then("the lookup fails for B")]
fn then_fails_for_b(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert_eq!(
        *borrowed,
        Err(PlacesError::LookupFailed {
            id: "B".to_owned(),
            source: Some(not_found()),
        })
    );
}

#[then("C was never requested")]
fn then_c_skipped(#[from(sdk)] sdk: &SdkCell) {
    let guard = sdk.borrow();
    let stub = guard.as_ref().expect("sdk must be initialised");
    assert_eq!(stub.lookup_log(), vec!["A".to_owned(), "B".to_owned()]);
}

#[then("no places are returned")]
fn then_empty(#[from(result)] result: &ResultCell) {
    assert_eq!(*result.borrow(), Ok(Vec::new()));
}

#[then("the SDK received no lookups")]
fn then_no_lookups(#[from(sdk)] sdk: &SdkCell) {
    let guard = sdk.borrow();
    let stub = guard.as_ref().expect("sdk must be initialised");
    assert!(stub.lookup_log().is_empty());
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/batch_lookup.feature", name = $title)]
        fn $fn_name(sdk: SdkCell, result: ResultCell) {
            let _ = (sdk, result);
        }
    };
}

register_scenario!(resolving_in_order, "resolving places in input order");
register_scenario!(failing_fast, "failing fast on the first unresolved id");
register_scenario!(looking_up_nothing, "looking up nothing");
