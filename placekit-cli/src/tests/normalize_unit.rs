//! Configuration resolution and record loading for `normalize`.

use super::helpers::Workspace;
use super::*;
use crate::normalize::{NormalizeConfig, RecordPlatform, normalize_file, write_place};
use rstest::rstest;

const IOS_RECORD: &str = r#"{
    "name": "Sydney Opera House",
    "placeID": "ChIJ3S-JXmauEmsRUcIaWtf4MzE",
    "coordinate": {"latitude": -33.8568, "longitude": 151.2153},
    "addressComponents": [
        {"type": "locality", "name": "Sydney"},
        {"type": "locality", "name": "The Rocks"}
    ]
}"#;

const ANDROID_RECORD: &str = r#"{
    "id": "ChIJLU7jZClu5kcR4PcOOO6p3I0",
    "name": "Eiffel Tower",
    "types": ["TOURIST_ATTRACTION", "POINT_OF_INTEREST"],
    "latLng": {"latitude": 48.8584, "longitude": 2.2945},
    "viewport": {
        "southwest": {"latitude": 48.85, "longitude": 2.28},
        "northeast": {"latitude": 48.86, "longitude": 2.30}
    }
}"#;

fn config(platform: RecordPlatform, record: camino::Utf8PathBuf) -> NormalizeConfig {
    NormalizeConfig { platform, record }
}

#[rstest]
fn platform_is_required() {
    let args = NormalizeArgs {
        platform: None,
        record: Some("record.json".into()),
    };
    match NormalizeConfig::try_from(args).expect_err("platform is required") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLATFORM);
            assert_eq!(env, ENV_PLATFORM);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn record_path_is_required() {
    let args = NormalizeArgs {
        platform: Some(RecordPlatform::Ios),
        record: None,
    };
    match NormalizeConfig::try_from(args).expect_err("record is required") {
        CliError::MissingArgument { field, .. } => assert_eq!(field, ARG_RECORD),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn normalizes_ios_record() {
    let workspace = Workspace::new();
    let path = workspace.write("ios.json", IOS_RECORD);
    let place = normalize_file(&config(RecordPlatform::Ios, path)).expect("record normalizes");
    assert_eq!(place.id, "ChIJ3S-JXmauEmsRUcIaWtf4MzE");
    let components = place.address_components.expect("components copied");
    assert_eq!(components.get("locality").map(String::as_str), Some("The Rocks"));
}

#[rstest]
fn normalizes_android_record_to_camel_case_json() {
    let workspace = Workspace::new();
    let path = workspace.write("android.json", ANDROID_RECORD);
    let place =
        normalize_file(&config(RecordPlatform::Android, path)).expect("record normalizes");
    let mut out = Vec::new();
    write_place(&mut out, &place).expect("write succeeds");
    let json: serde_json::Value = serde_json::from_slice(&out).expect("json output");
    assert_eq!(
        json["types"],
        serde_json::json!(["tourist_attraction", "point_of_interest"])
    );
    assert_eq!(json["viewport"]["northEast"]["latitude"], 48.86);
    assert!(json.get("addressComponents").is_none());
}

#[rstest]
fn reports_missing_record_file() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");
    match normalize_file(&config(RecordPlatform::Ios, path.clone())).expect_err("missing file") {
        CliError::OpenRecord { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenRecord, found {other:?}"),
    }
}

#[rstest]
fn reports_record_of_the_wrong_platform() {
    let workspace = Workspace::new();
    let path = workspace.write("android.json", ANDROID_RECORD);
    let err = normalize_file(&config(RecordPlatform::Ios, path)).expect_err("wrong shape");
    assert!(matches!(err, CliError::ParseRecord { .. }), "{err:?}");
}
