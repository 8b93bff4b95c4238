//! Facade crate for the placekit places bridge.
//!
//! This crate re-exports the platform-neutral places API and exposes each
//! platform's record types and normalizer behind a feature flag (`ios`,
//! `android`). A host selects its platform at build time and wraps its native
//! SDK binding in a [`NativeAdapter`].

#![forbid(unsafe_code)]

pub use placekit_core::{
    AddressComponents, Location, LookupCompletion, NativeAdapter, NativeError, NativePlacesSdk,
    NativeRecord, PendingPick, PickResult, PickerConfig, PickerDelegate, PickerScope,
    PickerSession, Place, PlacesAdapter, PlacesError, Platform, SessionPhase, StaticMapOptions,
    Viewport, location_map_url, lookup, static_map_url,
};

#[cfg(feature = "serde")]
pub use placekit_core::{ConfigError, PlacesConfig};

#[cfg(feature = "test-support")]
pub use placekit_core::test_support;

/// iOS record types and normalizer.
#[cfg(feature = "ios")]
pub mod ios {
    pub use placekit_ios::{
        CoordinateBounds, CoordinateDegrees, GmsAddressComponent, GmsPlace, IosAdapter,
        coordinate_bounds, normalize,
    };
}

/// Android record types and normalizer.
#[cfg(feature = "android")]
pub mod android {
    pub use placekit_android::{
        AddressComponent, AndroidAdapter, AndroidPlace, LatLng, LatLngBounds, PlaceType,
        lat_lng_bounds, normalize,
    };
}
