//! iOS place records and their normalization.
//!
//! The record types mirror the shapes the iOS places SDK hands to its
//! lookup callbacks and picker delegate (`GMSPlace`, `GMSCoordinateBounds`,
//! `GMSAddressComponent`). A binding over the real SDK copies native values
//! into these types and implements [`placekit_core::NativePlacesSdk`] with
//! `Record = GmsPlace`.

#![forbid(unsafe_code)]

mod normalize;
mod record;

pub use normalize::{coordinate_bounds, normalize};
pub use record::{CoordinateBounds, CoordinateDegrees, GmsAddressComponent, GmsPlace};

/// Adapter over an iOS SDK binding.
pub type IosAdapter<S> = placekit_core::NativeAdapter<S>;
