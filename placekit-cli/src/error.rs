//! Error types emitted by the placekit CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use placekit_core::ConfigError;
use thiserror::Error;

/// Errors emitted by the placekit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A coordinate lies outside its valid range.
    #[error("{field} {value} is outside {min}..={max}")]
    CoordinateOutOfRange {
        /// Flag name.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// An image dimension was zero.
    #[error("{field} must be at least one pixel")]
    EmptyDimension {
        /// Flag name.
        field: &'static str,
    },
    /// The places config file could not be loaded.
    #[error(transparent)]
    PlacesConfig(#[from] ConfigError),
    /// Opening the native record file failed.
    #[error("failed to open record at {path:?}: {source}")]
    OpenRecord {
        /// Record path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The native record JSON could not be decoded.
    #[error("failed to parse record JSON at {path:?}: {source}")]
    ParseRecord {
        /// Record path.
        path: Utf8PathBuf,
        /// Error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the canonical place failed.
    #[error("failed to serialise place: {0}")]
    SerialisePlace(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
