//! The picker session: one presentation of the native place picker at a time.
//!
//! A [`PickerSession`] moves through `Idle → Presenting → Settling → Idle`.
//! [`PickerSession::pick_place`] arms it and presents the native picker; the
//! first terminal event delivered through the [`PickerDelegate`] settles it,
//! dismisses the native UI and fulfils the caller's [`PendingPick`].
//!
//! Sessions over bindings with the same [`PickerScope`] share one slot, so
//! the at-most-one-presentation rule holds across every session in the
//! process, on any thread. Native calls are always made with the slot lock
//! released; a native layer may report an event synchronously from inside
//! `present_picker`.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::native::{PickerEvent, PickerEventSink};
use crate::{
    NativePlacesSdk, NativeRecord, Place, PlacesError, PickerConfig, PickerDelegate, PickerScope,
    Viewport,
};

/// Outcome of a pick: `Ok(Some(place))` when picked, `Ok(None)` when the user
/// cancelled.
pub type PickResult = Result<Option<Place>, PlacesError>;

/// Observable phase of a [`PickerSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No native UI is shown and nothing is pending.
    Idle,
    /// The native picker is on screen awaiting a terminal event.
    Presenting,
    /// A terminal event was accepted and the native UI is being dismissed.
    Settling,
}

enum SessionState {
    Idle,
    Presenting {
        owner: u64,
        episode: u64,
        pending: oneshot::Sender<PickResult>,
    },
    Settling,
}

impl SessionState {
    const fn phase(&self) -> SessionPhase {
        match self {
            Self::Idle => SessionPhase::Idle,
            Self::Presenting { .. } => SessionPhase::Presenting,
            Self::Settling => SessionPhase::Settling,
        }
    }
}

struct SessionSlot {
    state: SessionState,
    next_episode: u64,
}

type SharedSlot = Arc<Mutex<SessionSlot>>;

static SLOTS: OnceLock<Mutex<HashMap<PickerScope, Weak<Mutex<SessionSlot>>>>> = OnceLock::new();
static NEXT_SESSION: AtomicU64 = AtomicU64::new(0);

fn slots_lock() -> &'static Mutex<HashMap<PickerScope, Weak<Mutex<SessionSlot>>>> {
    SLOTS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// The slot every session over `scope` arms, created on first use.
fn shared_slot(scope: PickerScope) -> SharedSlot {
    let mut slots = slots_lock().lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(slot) = slots.get(&scope).and_then(Weak::upgrade) {
        return slot;
    }
    slots.retain(|_, slot| slot.strong_count() > 0);
    let slot = Arc::new(Mutex::new(SessionSlot {
        state: SessionState::Idle,
        next_episode: 0,
    }));
    slots.insert(scope, Arc::downgrade(&slot));
    slot
}

struct SessionInner<S: NativePlacesSdk> {
    id: u64,
    sdk: Arc<S>,
    slot: SharedSlot,
}

impl<S: NativePlacesSdk> SessionInner<S> {
    fn lock(&self) -> MutexGuard<'_, SessionSlot> {
        // The slot holds no invariant a panicking holder could break halfway.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn arm(&self) -> Result<(u64, oneshot::Receiver<PickResult>), PlacesError> {
        let mut slot = self.lock();
        if !matches!(slot.state, SessionState::Idle) {
            return Err(PlacesError::SessionBusy);
        }
        let episode = slot.next_episode;
        slot.next_episode = episode.wrapping_add(1);
        let (pending, receiver) = oneshot::channel();
        slot.state = SessionState::Presenting {
            owner: self.id,
            episode,
            pending,
        };
        Ok((episode, receiver))
    }

    /// Move a presentation matching `accept` to settling and hand back its
    /// episode and sender.
    fn release(
        &self,
        accept: impl Fn(u64, u64) -> bool,
    ) -> Option<(u64, oneshot::Sender<PickResult>)> {
        let mut slot = self.lock();
        match std::mem::replace(&mut slot.state, SessionState::Settling) {
            SessionState::Presenting {
                owner,
                episode,
                pending,
            } if accept(owner, episode) => Some((episode, pending)),
            other => {
                slot.state = other;
                None
            }
        }
    }

    fn teardown(&self) {
        self.sdk.dismiss_picker();
        self.lock().state = SessionState::Idle;
    }
}

impl<S: NativePlacesSdk> PickerEventSink<S::Record> for SessionInner<S> {
    fn settle(&self, episode: u64, event: PickerEvent<S::Record>) {
        let id = self.id;
        let Some((_, pending)) = self.release(|owner, live| owner == id && live == episode) else {
            log::debug!("ignoring picker event for settled episode {episode}");
            return;
        };
        self.teardown();
        let result = match event {
            PickerEvent::Picked(record) => Ok(Some(record.normalize())),
            PickerEvent::Cancelled => Ok(None),
            PickerEvent::Failed(error) => Err(PlacesError::PickFailed(error)),
        };
        log::debug!("picker episode {episode} settled");
        if pending.send(result).is_err() {
            log::warn!("pick result for episode {episode} dropped: caller stopped waiting");
        }
    }
}

impl<S: NativePlacesSdk> Drop for SessionInner<S> {
    fn drop(&mut self) {
        let id = self.id;
        if let Some((episode, pending)) = self.release(|owner, _| owner == id) {
            log::debug!("session dropped while presenting episode {episode}");
            self.teardown();
            drop(pending);
        }
    }
}

/// Handle on the native picker.
///
/// All sessions whose bindings report the same [`PickerScope`] share one
/// slot, so only one of them can present at a time anywhere in the process.
/// A pick while any of them is active is rejected rather than queued.
/// Dropping a session that is presenting dismisses the picker and abandons
/// its pick.
pub struct PickerSession<S: NativePlacesSdk> {
    inner: Arc<SessionInner<S>>,
}

impl<S: NativePlacesSdk> PickerSession<S> {
    /// Create a session driving `sdk`.
    ///
    /// The session joins the slot of `sdk`'s [`PickerScope`], which is idle
    /// unless another session over the same picker is presenting.
    #[must_use]
    pub fn new(sdk: Arc<S>) -> Self {
        let slot = shared_slot(sdk.picker_scope());
        Self {
            inner: Arc::new(SessionInner {
                id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
                sdk,
                slot,
            }),
        }
    }

    /// Present the native picker and return a future for its outcome.
    ///
    /// The returned future is created before the picker is presented, so the
    /// outcome is captured even if the native layer reports synchronously.
    /// When a session is already active the future resolves immediately to
    /// [`PlacesError::SessionBusy`] and the active session is left untouched.
    pub fn pick_place(&self, viewport: Option<Viewport>) -> PendingPick {
        let (episode, receiver) = match self.inner.arm() {
            Ok(armed) => armed,
            Err(err) => {
                log::debug!("rejecting pick: {err}");
                return PendingPick::ready(Err(err));
            }
        };
        log::debug!("presenting picker episode {episode}");
        self.inner
            .sdk
            .present_picker(PickerConfig { viewport }, self.delegate(episode));
        PendingPick::waiting(receiver)
    }

    /// Tear down any active presentation and return to idle.
    ///
    /// For host lifecycle events such as the presenting screen going away.
    /// This acts on the shared picker, whichever session presented it. A
    /// caller awaiting the abandoned pick receives [`PlacesError::Abandoned`].
    /// Calling this while idle does nothing.
    pub fn reset(&self) {
        if let Some((episode, pending)) = self.inner.release(|_, _| true) {
            log::debug!("resetting picker episode {episode}");
            self.inner.teardown();
            drop(pending);
        }
    }

    /// Current phase of the shared picker.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().state.phase()
    }

    fn delegate(&self, episode: u64) -> PickerDelegate<S::Record> {
        let sink: Arc<dyn PickerEventSink<S::Record>> = self.inner.clone();
        let weak: Weak<dyn PickerEventSink<S::Record>> = Arc::downgrade(&sink);
        PickerDelegate::new(episode, weak)
    }
}

impl<S: NativePlacesSdk> std::fmt::Debug for PickerSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerSession")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

/// Future resolving to the outcome of one pick request.
///
/// Dropping it does not dismiss the picker; the session still tears down when
/// the native layer reports.
#[must_use = "the pick outcome is only observable by awaiting this future"]
#[derive(Debug)]
pub struct PendingPick {
    state: PendingState,
}

#[derive(Debug)]
enum PendingState {
    Ready(Option<PickResult>),
    Waiting(oneshot::Receiver<PickResult>),
}

impl PendingPick {
    pub(crate) const fn ready(result: PickResult) -> Self {
        Self {
            state: PendingState::Ready(Some(result)),
        }
    }

    const fn waiting(receiver: oneshot::Receiver<PickResult>) -> Self {
        Self {
            state: PendingState::Waiting(receiver),
        }
    }
}

impl Future for PendingPick {
    type Output = PickResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            PendingState::Ready(result) => Poll::Ready(
                result
                    .take()
                    .unwrap_or(Err(PlacesError::Abandoned { operation: "pick" })),
            ),
            PendingState::Waiting(receiver) => Pin::new(receiver).poll(cx).map(|received| {
                received.unwrap_or(Err(PlacesError::Abandoned { operation: "pick" }))
            }),
        }
    }
}
