//! `normalize` command: convert a captured native record into a canonical place.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placekit_android::AndroidPlace;
use placekit_core::{NativeRecord, Place};
use placekit_ios::GmsPlace;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{ARG_PLATFORM, ARG_RECORD, CliError, ENV_PLATFORM, ENV_RECORD};

/// Native record flavour accepted by `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RecordPlatform {
    /// A `GMSPlace` captured from the iOS SDK.
    Ios,
    /// A `Place` captured from the Android SDK.
    Android,
}

/// CLI arguments for the `normalize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a native place record serialised as JSON and print the \
                 canonical place it normalizes to.",
    about = "Normalize a native place record"
)]
#[ortho_config(prefix = "PLACEKIT")]
pub(crate) struct NormalizeArgs {
    /// Platform the record was captured on.
    #[arg(long = ARG_PLATFORM, value_enum)]
    #[serde(default)]
    pub(crate) platform: Option<RecordPlatform>,
    /// Path to the JSON record.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) record: Option<Utf8PathBuf>,
}

impl NormalizeArgs {
    pub(crate) fn into_config(self) -> Result<NormalizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NormalizeConfig::try_from(merged)
    }
}

/// Resolved `normalize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizeConfig {
    pub(crate) platform: RecordPlatform,
    pub(crate) record: Utf8PathBuf,
}

impl TryFrom<NormalizeArgs> for NormalizeConfig {
    type Error = CliError;

    fn try_from(args: NormalizeArgs) -> Result<Self, Self::Error> {
        let platform = args.platform.ok_or(CliError::MissingArgument {
            field: ARG_PLATFORM,
            env: ENV_PLATFORM,
        })?;
        let record = args.record.ok_or(CliError::MissingArgument {
            field: ARG_RECORD,
            env: ENV_RECORD,
        })?;
        Ok(Self { platform, record })
    }
}

pub(super) fn run_normalize(args: NormalizeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let place = normalize_file(&config)?;
    write_place(writer, &place)
}

/// Load the configured record and normalize it.
pub(super) fn normalize_file(config: &NormalizeConfig) -> Result<Place, CliError> {
    match config.platform {
        RecordPlatform::Ios => load_record::<GmsPlace>(&config.record).map(|r| r.normalize()),
        RecordPlatform::Android => {
            load_record::<AndroidPlace>(&config.record).map(|r| r.normalize())
        }
    }
}

fn load_record<R: DeserializeOwned>(path: &Utf8Path) -> Result<R, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenRecord {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRecord {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn write_place(writer: &mut dyn Write, place: &Place) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(place).map_err(CliError::SerialisePlace)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
