//! Boundary between the bridge and a platform's native places SDK.
//!
//! A platform binding implements [`NativePlacesSdk`] over the real SDK. The
//! bridge hands it single-use completion objects ([`LookupCompletion`],
//! [`PickerDelegate`]) and suspends on the matching receiver until the native
//! layer reports back.

use std::any::TypeId;
use std::fmt;
use std::sync::Weak;

use tokio::sync::oneshot;

use crate::{NativeError, Place, Viewport};

/// Mobile platform served by a native SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Apple iOS.
    Ios,
    /// Google Android.
    Android,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => f.write_str("iOS"),
            Self::Android => f.write_str("Android"),
        }
    }
}

/// A platform-owned place record that can be normalized.
///
/// Implementations must be total for every structurally valid record and
/// must not retain references into the native value.
pub trait NativeRecord {
    /// Convert the native record into a canonical [`Place`].
    fn normalize(&self) -> Place;
}

/// Native picker presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickerConfig {
    /// Bounds the picker map opens on; `None` leaves the SDK default.
    pub viewport: Option<Viewport>,
}

/// Identity of the native picker a binding drives.
///
/// Sessions whose bindings report the same scope share one busy slot, so at
/// most one of them presents at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerScope(ScopeKey);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ScopeKey {
    Type(TypeId),
    Instance(usize),
}

impl PickerScope {
    /// Every value of `T` drives the same, process-wide picker.
    #[must_use]
    pub const fn of_type<T: ?Sized + 'static>() -> Self {
        Self(ScopeKey::Type(TypeId::of::<T>()))
    }

    /// Only `instance` itself drives this picker.
    ///
    /// The scope is keyed by address, so `instance` must stay where it is
    /// (for example inside an `Arc`) for as long as sessions use it.
    #[must_use]
    pub fn of_instance<T>(instance: &T) -> Self {
        Self(ScopeKey::Instance(std::ptr::from_ref(instance).addr()))
    }
}

/// Capabilities the bridge needs from a native places SDK.
///
/// Every method is a non-blocking request. Results come back later through
/// the completion object passed in, possibly from another thread and
/// possibly before the method returns.
pub trait NativePlacesSdk: Send + Sync + 'static {
    /// Native place record delivered by lookups and the picker.
    type Record: NativeRecord + Send + 'static;

    /// Platform this SDK serves.
    fn platform(&self) -> Platform;

    /// Hand the API key to the native SDK.
    fn provide_api_key(&self, key: &str);

    /// Look up a single place and report through `completion`.
    fn look_up_place_id(&self, id: &str, completion: LookupCompletion<Self::Record>);

    /// Present the modal place picker over the topmost screen.
    fn present_picker(&self, config: PickerConfig, delegate: PickerDelegate<Self::Record>);

    /// Dismiss the modal place picker.
    fn dismiss_picker(&self);

    /// Which native picker this binding presents.
    ///
    /// Defaults to one picker per binding type, matching a native SDK whose
    /// picker is a process-wide singleton.
    fn picker_scope(&self) -> PickerScope {
        PickerScope::of_type::<Self>()
    }
}

pub(crate) type LookupReply<R> = Result<Option<R>, NativeError>;

/// Single-use completion handle for one id lookup.
///
/// Consuming methods make a second completion impossible. Dropping the handle
/// without completing it surfaces as [`crate::PlacesError::Abandoned`].
#[must_use = "the lookup never completes unless this handle is used"]
pub struct LookupCompletion<R> {
    sender: oneshot::Sender<LookupReply<R>>,
}

impl<R> LookupCompletion<R> {
    pub(crate) const fn new(sender: oneshot::Sender<LookupReply<R>>) -> Self {
        Self { sender }
    }

    /// Report the record found for the id.
    pub fn found(self, record: R) {
        self.complete(Ok(Some(record)));
    }

    /// Report that the SDK has no record for the id.
    pub fn not_found(self) {
        self.complete(Ok(None));
    }

    /// Report a native failure.
    pub fn failed(self, error: NativeError) {
        self.complete(Err(error));
    }

    /// Complete from a native `(record, error)` callback pair.
    ///
    /// A record takes precedence; an absent record with no error counts as
    /// not found.
    pub fn from_callback(self, record: Option<R>, error: Option<NativeError>) {
        match (record, error) {
            (Some(record), _) => self.found(record),
            (None, Some(error)) => self.failed(error),
            (None, None) => self.not_found(),
        }
    }

    fn complete(self, reply: LookupReply<R>) {
        if self.sender.send(reply).is_err() {
            log::debug!("lookup completed after its caller went away");
        }
    }
}

impl<R> fmt::Debug for LookupCompletion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupCompletion")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

/// Terminal event reported by a native picker.
pub(crate) enum PickerEvent<R> {
    Picked(R),
    Cancelled,
    Failed(NativeError),
}

/// Receiver of picker events, implemented by the picker session.
pub(crate) trait PickerEventSink<R>: Send + Sync {
    fn settle(&self, episode: u64, event: PickerEvent<R>);
}

/// Delegate handed to the native picker for one presentation.
///
/// The first event reported for a presentation settles it; later events,
/// and events from delegates of earlier presentations, are ignored. The
/// delegate holds only a weak link to its session, so a native layer keeping
/// it alive does not keep the session alive.
pub struct PickerDelegate<R> {
    episode: u64,
    sink: Weak<dyn PickerEventSink<R>>,
}

impl<R> PickerDelegate<R> {
    pub(crate) fn new(episode: u64, sink: Weak<dyn PickerEventSink<R>>) -> Self {
        Self { episode, sink }
    }

    /// The user picked `record`.
    pub fn did_pick(&self, record: R) {
        self.report(PickerEvent::Picked(record));
    }

    /// The user dismissed the picker without choosing.
    pub fn did_cancel(&self) {
        self.report(PickerEvent::Cancelled);
    }

    /// The picker failed with `error`.
    pub fn did_fail(&self, error: NativeError) {
        self.report(PickerEvent::Failed(error));
    }

    fn report(&self, event: PickerEvent<R>) {
        match self.sink.upgrade() {
            Some(sink) => sink.settle(self.episode, event),
            None => log::debug!(
                "picker event for episode {} arrived after its session was dropped",
                self.episode
            ),
        }
    }
}

impl<R> Clone for PickerDelegate<R> {
    fn clone(&self) -> Self {
        Self {
            episode: self.episode,
            sink: Weak::clone(&self.sink),
        }
    }
}

impl<R> fmt::Debug for PickerDelegate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerDelegate")
            .field("episode", &self.episode)
            .finish_non_exhaustive()
    }
}
