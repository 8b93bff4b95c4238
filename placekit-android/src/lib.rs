//! Android place records and their normalization.
//!
//! The record types mirror the Android places SDK's `Place`, `LatLng`,
//! `LatLngBounds` and `AddressComponent`. A binding over the real SDK copies
//! native values into these types and implements
//! [`placekit_core::NativePlacesSdk`] with `Record = AndroidPlace`.

#![forbid(unsafe_code)]

mod normalize;
mod record;

pub use normalize::{lat_lng_bounds, normalize};
pub use record::{AddressComponent, AndroidPlace, LatLng, LatLngBounds, PlaceType};

/// Adapter over an Android SDK binding.
pub type AndroidAdapter<S> = placekit_core::NativeAdapter<S>;
