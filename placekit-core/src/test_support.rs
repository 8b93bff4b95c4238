//! Test doubles for the native places layer.
//!
//! [`ScriptedPlacesSdk`] answers lookups from a script and records every
//! picker interaction so tests can drive delegates by hand. It works with any
//! record type; [`StubPlacesSdk`] pairs it with the minimal [`StubRecord`].

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    Location, LookupCompletion, NativeError, NativePlacesSdk, NativeRecord, Place, PickerConfig,
    PickerDelegate, PickerScope, Platform,
};

/// Minimal native record normalizing to a [`Place`] with mandatory fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StubRecord {
    /// Native identifier.
    pub id: String,
    /// Position.
    pub location: Location,
}

impl StubRecord {
    /// Build a record named after its id.
    #[must_use]
    pub fn new(id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }
}

impl NativeRecord for StubRecord {
    fn normalize(&self) -> Place {
        Place::new(self.id.clone(), format!("Place {}", self.id), self.location)
    }
}

#[derive(Debug, Clone)]
enum LookupScript<R> {
    Found(R),
    Failed(NativeError),
}

#[derive(Clone)]
struct DismissHook(Arc<dyn Fn() + Send + Sync>);

impl fmt::Debug for DismissHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DismissHook")
    }
}

#[derive(Debug)]
struct ScriptState<R> {
    lookups: HashMap<String, LookupScript<R>>,
    defer_lookups: bool,
    lookup_log: Vec<String>,
    parked: VecDeque<(String, LookupCompletion<R>)>,
    provided_keys: Vec<String>,
    configs: Vec<PickerConfig>,
    delegates: Vec<PickerDelegate<R>>,
    dismissals: usize,
    on_dismiss: Option<DismissHook>,
    cancel_on_present: bool,
}

impl<R> Default for ScriptState<R> {
    fn default() -> Self {
        Self {
            lookups: HashMap::new(),
            defer_lookups: false,
            lookup_log: Vec::new(),
            parked: VecDeque::new(),
            provided_keys: Vec::new(),
            configs: Vec::new(),
            delegates: Vec::new(),
            dismissals: 0,
            on_dismiss: None,
            cancel_on_present: false,
        }
    }
}

/// Scripted [`NativePlacesSdk`] for tests.
///
/// Ids without a script are reported as not found. Lookups complete
/// synchronously unless [`Self::deferring_lookups`] parks them for
/// [`Self::complete_next_lookup`]. Each instance drives its own picker, so
/// sessions over separate instances never contend.
///
/// # Example
///
/// ```
/// use placekit_core::test_support::{StubPlacesSdk, StubRecord};
/// use placekit_core::{Location, NativePlacesSdk};
///
/// let sdk = StubPlacesSdk::default().with_place(StubRecord::new("A", Location::new(1.0, 2.0)));
/// sdk.provide_api_key("key");
/// assert_eq!(sdk.provided_keys(), vec!["key".to_owned()]);
/// ```
#[derive(Debug)]
pub struct ScriptedPlacesSdk<R> {
    platform: Platform,
    state: Mutex<ScriptState<R>>,
}

/// Scripted SDK delivering [`StubRecord`]s.
pub type StubPlacesSdk = ScriptedPlacesSdk<StubRecord>;

impl Default for StubPlacesSdk {
    fn default() -> Self {
        Self::for_platform(Platform::Ios)
    }
}

impl StubPlacesSdk {
    /// Answer lookups of `record.id` with `record`.
    #[must_use]
    pub fn with_place(self, record: StubRecord) -> Self {
        let id = record.id.clone();
        self.with_record(id, record)
    }
}

impl<R: Clone> ScriptedPlacesSdk<R> {
    /// Create an empty script reporting `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            state: Mutex::new(ScriptState::default()),
        }
    }

    /// Answer lookups of `id` with `record`.
    #[must_use]
    pub fn with_record(self, id: impl Into<String>, record: R) -> Self {
        self.lock()
            .lookups
            .insert(id.into(), LookupScript::Found(record));
        self
    }

    /// Answer lookups of `id` with a native failure.
    #[must_use]
    pub fn with_failure(self, id: impl Into<String>, error: NativeError) -> Self {
        self.lock()
            .lookups
            .insert(id.into(), LookupScript::Failed(error));
        self
    }

    /// Park lookups until [`Self::complete_next_lookup`] is called.
    #[must_use]
    pub fn deferring_lookups(self) -> Self {
        self.lock().defer_lookups = true;
        self
    }

    /// Report a cancellation from inside `present_picker`.
    pub fn reply_on_present_with_cancel(&self) {
        self.lock().cancel_on_present = true;
    }

    /// Run `hook` from inside every `dismiss_picker` call, after the
    /// dismissal is recorded.
    pub fn on_dismiss(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.lock().on_dismiss = Some(DismissHook(Arc::new(hook)));
    }

    /// Complete the oldest parked lookup from the script and return its id.
    pub fn complete_next_lookup(&self) -> Option<String> {
        let (id, completion) = self.lock().parked.pop_front()?;
        let script = self.lock().lookups.get(&id).cloned();
        answer(script, completion);
        Some(id)
    }

    /// Number of lookups currently parked.
    #[must_use]
    pub fn parked_lookups(&self) -> usize {
        self.lock().parked.len()
    }

    /// Ids requested so far, in request order.
    #[must_use]
    pub fn lookup_log(&self) -> Vec<String> {
        self.lock().lookup_log.clone()
    }

    /// API keys provided so far.
    #[must_use]
    pub fn provided_keys(&self) -> Vec<String> {
        self.lock().provided_keys.clone()
    }

    /// Delegate of the most recent presentation.
    #[must_use]
    pub fn delegate(&self) -> Option<PickerDelegate<R>> {
        self.lock().delegates.last().cloned()
    }

    /// Configuration of the most recent presentation.
    #[must_use]
    pub fn last_config(&self) -> Option<PickerConfig> {
        self.lock().configs.last().copied()
    }

    /// Number of times the picker was presented.
    #[must_use]
    pub fn presentations(&self) -> usize {
        self.lock().configs.len()
    }

    /// Number of times the picker was dismissed.
    #[must_use]
    pub fn dismissals(&self) -> usize {
        self.lock().dismissals
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn answer<R>(script: Option<LookupScript<R>>, completion: LookupCompletion<R>) {
    match script {
        Some(LookupScript::Found(record)) => completion.found(record),
        Some(LookupScript::Failed(error)) => completion.failed(error),
        None => completion.not_found(),
    }
}

impl<R> NativePlacesSdk for ScriptedPlacesSdk<R>
where
    R: NativeRecord + Clone + Send + 'static,
{
    type Record = R;

    fn platform(&self) -> Platform {
        self.platform
    }

    fn provide_api_key(&self, key: &str) {
        self.lock().provided_keys.push(key.to_owned());
    }

    fn look_up_place_id(&self, id: &str, completion: LookupCompletion<R>) {
        let script = {
            let mut state = self.lock();
            state.lookup_log.push(id.to_owned());
            if state.defer_lookups {
                state.parked.push_back((id.to_owned(), completion));
                return;
            }
            state.lookups.get(id).cloned()
        };
        answer(script, completion);
    }

    fn present_picker(&self, config: PickerConfig, delegate: PickerDelegate<R>) {
        let cancel = {
            let mut state = self.lock();
            state.configs.push(config);
            state.delegates.push(delegate.clone());
            state.cancel_on_present
        };
        // The delegate re-enters `dismiss_picker`, so the lock must be released.
        if cancel {
            delegate.did_cancel();
        }
    }

    fn dismiss_picker(&self) {
        let hook = {
            let mut state = self.lock();
            state.dismissals += 1;
            state.on_dismiss.clone()
        };
        if let Some(DismissHook(run)) = hook {
            run();
        }
    }

    fn picker_scope(&self) -> PickerScope {
        PickerScope::of_instance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tokio::sync::oneshot;

    #[rstest]
    fn unscripted_ids_are_not_found() {
        let sdk = StubPlacesSdk::default();
        let (tx, mut rx) = oneshot::channel();
        sdk.look_up_place_id("missing", LookupCompletion::new(tx));
        assert_eq!(rx.try_recv().expect("answered"), Ok(None));
        assert_eq!(sdk.lookup_log(), vec!["missing".to_owned()]);
    }

    #[rstest]
    fn deferred_lookups_wait_for_completion() {
        let record = StubRecord::new("A", Location::new(0.0, 0.0));
        let sdk = StubPlacesSdk::default()
            .with_place(record.clone())
            .deferring_lookups();
        let (tx, mut rx) = oneshot::channel();
        sdk.look_up_place_id("A", LookupCompletion::new(tx));
        assert!(rx.try_recv().is_err());
        assert_eq!(sdk.parked_lookups(), 1);

        assert_eq!(sdk.complete_next_lookup(), Some("A".to_owned()));
        assert_eq!(rx.try_recv().expect("answered"), Ok(Some(record)));
        assert_eq!(sdk.complete_next_lookup(), None);
    }
}
