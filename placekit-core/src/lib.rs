//! Core of the placekit places bridge.
//!
//! Native place-search SDKs report through delegates and callbacks, present
//! a modal picker that can only be shown once at a time, and each use their
//! own place record shape. This crate turns that into:
//!
//! - a canonical [`Place`] schema that every platform normalizes into,
//! - a [`PickerSession`] that owns the single native picker and turns its
//!   delegate callbacks into a [`PendingPick`] future,
//! - a sequential, fail-fast [`lookup::get_places_by_id`],
//! - the [`PlacesAdapter`] surface implemented for any [`NativePlacesSdk`].

#![forbid(unsafe_code)]

mod adapter;
#[cfg(feature = "serde")]
pub mod config;
mod error;
pub mod lookup;
mod model;
mod native;
mod session;
mod static_map;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adapter::{NativeAdapter, PlacesAdapter};
#[cfg(feature = "serde")]
pub use config::{ConfigError, PlacesConfig};
pub use error::{NativeError, PlacesError};
pub use model::{AddressComponents, Location, Place, Viewport};
pub use native::{
    LookupCompletion, NativePlacesSdk, NativeRecord, PickerConfig, PickerDelegate, PickerScope,
    Platform,
};
pub use session::{PendingPick, PickResult, PickerSession, SessionPhase};
pub use static_map::{
    DEFAULT_ZOOM, STATIC_MAP_ENDPOINT, StaticMapOptions, location_map_url, static_map_url,
};
