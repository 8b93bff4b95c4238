//! Platform-neutral places API.
//!
//! [`PlacesAdapter`] is the surface callers program against. Each platform
//! provides it by wrapping its [`NativePlacesSdk`] binding in a
//! [`NativeAdapter`]; which platform is compiled in is decided by cargo
//! features on the `placekit` facade.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

#[cfg(feature = "serde")]
use crate::PlacesConfig;
use crate::lookup;
use crate::{
    NativePlacesSdk, PendingPick, PickerSession, Place, PlacesError, Platform, StaticMapOptions,
    Viewport, static_map_url,
};

/// Pick places from a map UI or fetch them by id.
///
/// # Examples
///
/// ```
/// use placekit_core::test_support::{StubPlacesSdk, StubRecord};
/// use placekit_core::{Location, NativeAdapter, PlacesAdapter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let sdk = StubPlacesSdk::default().with_place(StubRecord::new("A", Location::new(1.0, 2.0)));
/// let adapter = NativeAdapter::new(sdk).with_api_key("key");
/// adapter.init()?;
/// let places = runtime.block_on(adapter.get_places_by_id(&["A".to_owned()]))?;
/// assert_eq!(places.len(), 1);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PlacesAdapter: Send + Sync {
    /// Platform this adapter serves.
    fn platform(&self) -> Platform;

    /// Provide the API key to the native SDK.
    ///
    /// Must succeed once before [`Self::pick_place`] or
    /// [`Self::get_places_by_id`] are used. Calling it again re-provides the
    /// same key, which is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::MissingApiKey`] when no key is configured.
    fn init(&self) -> Result<(), PlacesError>;

    /// Present the native picker, optionally bounded to `viewport`.
    ///
    /// Resolves to `Ok(None)` when the user cancels. Resolves to
    /// [`PlacesError::SessionBusy`] when a picker is already shown.
    fn pick_place(&self, viewport: Option<Viewport>) -> PendingPick;

    /// Look up `ids` in order, failing on the first unresolved id.
    ///
    /// # Errors
    ///
    /// See [`lookup::get_places_by_id`]; also
    /// [`PlacesError::NotInitialised`] before [`Self::init`].
    async fn get_places_by_id(&self, ids: &[String]) -> Result<Vec<Place>, PlacesError>;

    /// Static map image URL for `place`, signed with the browser key if any.
    fn static_map_url(&self, place: &Place, options: StaticMapOptions) -> String;
}

/// [`PlacesAdapter`] backed by a native SDK binding.
pub struct NativeAdapter<S: NativePlacesSdk> {
    sdk: Arc<S>,
    session: PickerSession<S>,
    api_key: Option<String>,
    browser_key: Option<String>,
    initialised: AtomicBool,
}

impl<S: NativePlacesSdk> NativeAdapter<S> {
    /// Wrap `sdk` with no keys configured.
    #[must_use]
    pub fn new(sdk: S) -> Self {
        let sdk = Arc::new(sdk);
        Self {
            session: PickerSession::new(Arc::clone(&sdk)),
            sdk,
            api_key: None,
            browser_key: None,
            initialised: AtomicBool::new(false),
        }
    }

    /// Wrap `sdk` using the keys in `config`.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn from_config(sdk: S, config: &PlacesConfig) -> Self {
        let platform = sdk.platform();
        let mut adapter = Self::new(sdk);
        adapter.api_key = config.key_for(platform).map(str::to_owned);
        adapter.browser_key = config.browser_key().map(str::to_owned);
        adapter
    }

    /// Set the platform SDK key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the browser key used for static map URLs.
    #[must_use]
    pub fn with_browser_key(mut self, key: impl Into<String>) -> Self {
        self.browser_key = Some(key.into());
        self
    }

    /// The wrapped native SDK.
    #[must_use]
    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// The adapter's picker session.
    #[must_use]
    pub const fn session(&self) -> &PickerSession<S> {
        &self.session
    }

    /// Whether [`PlacesAdapter::init`] has succeeded.
    #[must_use]
    pub fn is_initialised(&self) -> bool {
        self.initialised.load(Ordering::Acquire)
    }

    fn ensure_initialised(&self) -> Result<(), PlacesError> {
        if self.is_initialised() {
            Ok(())
        } else {
            Err(PlacesError::NotInitialised)
        }
    }
}

#[async_trait]
impl<S: NativePlacesSdk> PlacesAdapter for NativeAdapter<S> {
    fn platform(&self) -> Platform {
        self.sdk.platform()
    }

    fn init(&self) -> Result<(), PlacesError> {
        let platform = self.platform();
        let key = self
            .api_key
            .as_deref()
            .ok_or(PlacesError::MissingApiKey { platform })?;
        self.sdk.provide_api_key(key);
        if self.initialised.swap(true, Ordering::AcqRel) {
            log::debug!("re-provided {platform} places API key");
        } else {
            log::info!("initialised {platform} places SDK");
        }
        Ok(())
    }

    fn pick_place(&self, viewport: Option<Viewport>) -> PendingPick {
        match self.ensure_initialised() {
            Ok(()) => self.session.pick_place(viewport),
            Err(err) => PendingPick::ready(Err(err)),
        }
    }

    async fn get_places_by_id(&self, ids: &[String]) -> Result<Vec<Place>, PlacesError> {
        self.ensure_initialised()?;
        lookup::get_places_by_id(self.sdk.as_ref(), ids).await
    }

    fn static_map_url(&self, place: &Place, options: StaticMapOptions) -> String {
        static_map_url(place, options, self.browser_key.as_deref())
    }
}

impl<S: NativePlacesSdk> fmt::Debug for NativeAdapter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeAdapter")
            .field("platform", &self.sdk.platform())
            .field("session", &self.session)
            .field("has_api_key", &self.api_key.is_some())
            .field("initialised", &self.is_initialised())
            .finish_non_exhaustive()
    }
}
