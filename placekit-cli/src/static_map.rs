//! `static-map` command: print a static map image URL for a coordinate.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placekit_core::{Location, PlacesConfig, StaticMapOptions, location_map_url};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CONFIG, ARG_HEIGHT, ARG_KEY, ARG_LATITUDE, ARG_LONGITUDE, ARG_WIDTH, CliError,
    ENV_LATITUDE, ENV_LONGITUDE,
};

/// Width used when `--width` is not given.
pub(crate) const DEFAULT_WIDTH: u32 = 600;
/// Height used when `--height` is not given.
pub(crate) const DEFAULT_HEIGHT: u32 = 300;

const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// CLI arguments for the `static-map` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print a Google Static Maps URL centred on a coordinate with \
                 a marker at it. The browser key comes from --key or from the \
                 `browser` entry of a google-places.config.json file.",
    about = "Print a static map image URL"
)]
#[ortho_config(prefix = "PLACEKIT")]
pub(crate) struct StaticMapArgs {
    /// Latitude of the map centre in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the map centre in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Image width in pixels.
    #[arg(long = ARG_WIDTH, value_name = "px")]
    #[serde(default)]
    pub(crate) width: Option<u32>,
    /// Image height in pixels.
    #[arg(long = ARG_HEIGHT, value_name = "px")]
    #[serde(default)]
    pub(crate) height: Option<u32>,
    /// Path to a `google-places.config.json` supplying the browser key.
    #[arg(long = ARG_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) config: Option<Utf8PathBuf>,
    /// Browser key; overrides the config file.
    #[arg(long = ARG_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) key: Option<String>,
}

impl StaticMapArgs {
    pub(crate) fn into_config(self) -> Result<StaticMapConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StaticMapConfig::try_from(merged)
    }
}

/// Resolved `static-map` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StaticMapConfig {
    pub(crate) centre: Location,
    pub(crate) options: StaticMapOptions,
    pub(crate) key: Option<String>,
}

impl StaticMapConfig {
    pub(crate) fn url(&self) -> String {
        location_map_url(self.centre, self.options, self.key.as_deref())
    }
}

impl TryFrom<StaticMapArgs> for StaticMapConfig {
    type Error = CliError;

    fn try_from(args: StaticMapArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_LONGITUDE,
        })?;
        check_range(ARG_LATITUDE, latitude, LATITUDE_BOUNDS)?;
        check_range(ARG_LONGITUDE, longitude, LONGITUDE_BOUNDS)?;

        let width = non_zero(ARG_WIDTH, args.width.unwrap_or(DEFAULT_WIDTH))?;
        let height = non_zero(ARG_HEIGHT, args.height.unwrap_or(DEFAULT_HEIGHT))?;

        let key = match (args.key, args.config) {
            (Some(key), _) => Some(key),
            (None, Some(path)) => PlacesConfig::load(&path)?.browser_key().map(str::to_owned),
            (None, None) => None,
        };

        Ok(Self {
            centre: Location::new(latitude, longitude),
            options: StaticMapOptions::new(width, height),
            key,
        })
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), CliError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CliError::CoordinateOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn non_zero(field: &'static str, value: u32) -> Result<u32, CliError> {
    if value == 0 {
        Err(CliError::EmptyDimension { field })
    } else {
        Ok(value)
    }
}

pub(super) fn run_static_map(args: StaticMapArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    write_static_map(writer, &config)
}

pub(super) fn write_static_map(
    writer: &mut dyn Write,
    config: &StaticMapConfig,
) -> Result<(), CliError> {
    writeln!(writer, "{}", config.url()).map_err(CliError::WriteOutput)
}
