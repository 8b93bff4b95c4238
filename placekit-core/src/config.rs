//! API key configuration shared with the install-time tooling.
//!
//! The file is `google-places.config.json` at the application root. Every
//! entry is optional; a platform without a key simply cannot be initialised.
//!
//! ```json
//! {
//!     "ios": { "key": "ios-key" },
//!     "android": { "key": "android-key" },
//!     "browser": { "key": "browser-key" },
//!     "location": true,
//!     "images": true
//! }
//! ```

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Platform;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "google-places.config.json";

/// A single API key entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyEntry {
    /// The API key.
    pub key: String,
}

/// Parsed `google-places.config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlacesConfig {
    /// iOS places SDK key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<KeyEntry>,
    /// Android places SDK key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<KeyEntry>,
    /// Browser key used for static map URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<KeyEntry>,
    /// Whether the app requests the location permission.
    #[serde(default)]
    pub location: bool,
    /// Whether the "powered by Google" images are bundled.
    #[serde(default)]
    pub images: bool,
}

/// Errors raised while loading a [`PlacesConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read places config at {path}: {source}")]
    Io {
        /// Location of the config file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was not valid config JSON.
    #[error("failed to parse places config: {source}")]
    Parse {
        /// Error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

impl PlacesConfig {
    /// Parse configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `json` is not a valid config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(io_error)?;
        let mut json = String::new();
        file.read_to_string(&mut json).map_err(io_error)?;
        Self::from_json(&json)
    }

    /// The SDK key for `platform`, if one is configured and non-empty.
    #[must_use]
    pub fn key_for(&self, platform: Platform) -> Option<&str> {
        let entry = match platform {
            Platform::Ios => self.ios.as_ref(),
            Platform::Android => self.android.as_ref(),
        };
        non_empty(entry)
    }

    /// The browser key for static map URLs, if configured and non-empty.
    #[must_use]
    pub fn browser_key(&self) -> Option<&str> {
        non_empty(self.browser.as_ref())
    }
}

fn non_empty(entry: Option<&KeyEntry>) -> Option<&str> {
    entry
        .map(|entry| entry.key.as_str())
        .filter(|key| !key.is_empty())
}
