//! Errors surfaced by the places bridge.

use thiserror::Error;

use crate::Platform;

/// An error reported by a native places SDK.
///
/// The payload is carried unmodified: `domain` and `code` mirror the native
/// error's own classification (an `NSError` domain on iOS, a status code
/// family on Android).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{domain} error {code}: {message}")]
pub struct NativeError {
    /// Native error domain.
    pub domain: String,
    /// Native error code within `domain`.
    pub code: i64,
    /// Human-readable description supplied by the SDK.
    pub message: String,
}

impl NativeError {
    /// Build a native error payload.
    #[must_use]
    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }
}

/// Errors returned by [`crate::PlacesAdapter`] operations.
///
/// Cancelling the picker is not represented here; a cancelled pick resolves
/// to `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacesError {
    /// A pick was requested while another picker session was active.
    #[error("a place picker session is already active")]
    SessionBusy,
    /// The native picker reported a failure after it was presented.
    #[error("place picker failed: {0}")]
    PickFailed(#[source] NativeError),
    /// Looking up `id` failed or produced no record; the batch was aborted.
    #[error("lookup of place {id:?} failed")]
    LookupFailed {
        /// Identifier whose lookup failed.
        id: String,
        /// Native error, or `None` when the SDK returned no record.
        #[source]
        source: Option<NativeError>,
    },
    /// An operation was attempted before [`crate::PlacesAdapter::init`].
    #[error("places SDK has not been initialised")]
    NotInitialised,
    /// The adapter has no API key for its platform.
    #[error("no API key configured for {platform}")]
    MissingApiKey {
        /// Platform lacking a key.
        platform: Platform,
    },
    /// A pending completion was dropped without a terminal event.
    #[error("{operation} was abandoned before the native layer completed it")]
    Abandoned {
        /// Operation that was abandoned (`"pick"` or `"lookup"`).
        operation: &'static str,
    },
}
