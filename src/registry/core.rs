//! The central notification store.
//!
//! [`NotificationRegistry`] keeps live entries in an ordered collection
//! shared between producer calls, timer-driven expiration tasks, and
//! consumer snapshots.
//!
//! ## Key Design Points
//! - **Single lock**: one `parking_lot::Mutex` guards the entry map and the
//!   disposed flag; critical sections touch nothing else.
//! - **Signal outside the lock**: the change signal is bumped after the lock
//!   is released, so subscribers may call straight back into the registry.
//! - **Ordered arena**: entries live in a `BTreeMap` keyed by a
//!   monotonically increasing sequence id. Key order is insertion order,
//!   reverse iteration is newest-first, and removal by id needs no node
//!   aliasing.
//! - **Insert before schedule**: an expirable entry is inserted and
//!   announced before its removal timer is spawned, so even a near-zero
//!   delay cannot retire an entry that was never observably present.
//!
//! ## Disposal policy
//! Mutations on a disposed registry are silent no-ops; queries return
//! [`Error::Disposed`]. Pending expiration timers re-check the disposed
//! flag at fire time and never resurrect cleared state.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Weak;

use parking_lot::Mutex;
use tokio::time::sleep;
use tracing::debug;

use super::change::ChangeListener;
use super::change::ChangeSignal;
use super::entry::ManagedEntry;
use super::notification::Notification;
use super::placement::NotificationPlacement;
use super::recorder::RegistryRecorder;
use super::scope::RegistryScope;
use crate::Clock;
use crate::Error;
use crate::NotificationMessage;
use crate::NotificationType;
use crate::Result;
use crate::SystemClock;

pub(crate) struct RegistryInner {
    clock: Arc<dyn Clock>,
    state: Mutex<RegistryState>,
    signal: ChangeSignal,
}

struct RegistryState {
    entries: BTreeMap<u64, ManagedEntry>,
    next_seq: u64,
    disposed: bool,
}

impl RegistryInner {
    /// Removes the entry with the given sequence id if still present.
    ///
    /// Shared removal path for dismiss, cancel, and the expiration timer.
    /// Takes a weak reference so detached timer tasks never keep a dropped
    /// registry alive. Fires the change signal only when a removal actually
    /// happened, and always after releasing the lock.
    pub(crate) fn remove_entry(
        registry: &Weak<RegistryInner>,
        seq: u64,
    ) -> bool {
        let Some(inner) = registry.upgrade() else {
            return false;
        };

        let removed = {
            let mut state = inner.state.lock();
            !state.disposed && state.entries.remove(&seq).is_some()
        };

        if removed {
            debug!(seq, "removed notification entry");
            inner.signal.notify();
        }

        removed
    }

    pub(crate) fn contains(
        &self,
        seq: u64,
    ) -> bool {
        let state = self.state.lock();
        !state.disposed && state.entries.contains_key(&seq)
    }
}

/// The central store: an ordered collection of live notification entries
/// with a mutation API, expiration scheduling, a change signal, and
/// disposal.
///
/// Cloning is cheap and every clone addresses the same underlying store.
///
/// ## Example
/// ```ignore
/// let registry = NotificationRegistry::new();
/// let mut listener = registry.subscribe();
///
/// registry.place(
///     NotificationMessage::builder(NotificationType::Warning, "low battery")
///         .key("power")
///         .expiration(SystemTime::now() + Duration::from_secs(5))
///         .build(),
/// );
///
/// listener.changed().await;
/// let visible = registry.notifications_by_key("power")?;
/// ```
#[derive(Clone)]
pub struct NotificationRegistry {
    inner: Arc<RegistryInner>,
}

impl NotificationRegistry {
    /// A registry reading time from the operating system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// A registry reading time from the supplied [`Clock`].
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                clock,
                state: Mutex::new(RegistryState {
                    entries: BTreeMap::new(),
                    next_seq: 0,
                    disposed: false,
                }),
                signal: ChangeSignal::new(),
            }),
        }
    }

    /// Subscribes to the change signal.
    ///
    /// The listener wakes once per net mutation; it carries no payload, so
    /// consumers re-query [`NotificationRegistry::notifications`] after
    /// each wake-up.
    pub fn subscribe(&self) -> ChangeListener {
        self.inner.signal.listen()
    }

    /// Places a message into the registry.
    ///
    /// Returns the placement handle for later cancellation, or `None` when
    /// the placement was a no-op:
    /// - the message type is [`NotificationType::None`],
    /// - the expiration already lies at or before the current clock reading
    ///   (inserting would flash an already-dead notification),
    /// - the registry is disposed.
    ///
    /// An expirable entry schedules one detached removal task for
    /// `expiration - now`. Must run inside a Tokio runtime when the message
    /// carries an expiration.
    pub fn place(
        &self,
        message: NotificationMessage,
    ) -> Option<NotificationPlacement> {
        if message.notification_type() == NotificationType::None {
            return None;
        }

        let now = self.inner.clock.now();

        let delay = match message.expiration() {
            Some(expiration) => {
                let Ok(delay) = expiration.duration_since(now) else {
                    return None;
                };
                if delay.is_zero() {
                    return None;
                }
                Some(delay)
            }
            None => None,
        };

        let placed_at = message.timestamp().unwrap_or(now);

        let seq = {
            let mut state = self.inner.state.lock();
            if state.disposed {
                return None;
            }
            let seq = state.next_seq;
            state.next_seq += 1;
            state
                .entries
                .insert(seq, ManagedEntry::new(seq, message, placed_at));
            seq
        };

        debug!(seq, expirable = delay.is_some(), "placed notification");
        self.inner.signal.notify();

        if let Some(delay) = delay {
            let registry = Arc::downgrade(&self.inner);
            tokio::spawn(async move {
                sleep(delay).await;
                // The entry being gone already is expected here: it was
                // dismissed, cancelled, or the registry was disposed while
                // the timer was pending.
                RegistryInner::remove_entry(&registry, seq);
            });
        }

        Some(NotificationPlacement::new(Arc::downgrade(&self.inner), seq))
    }

    /// Removes the entry backing the given view.
    ///
    /// Equivalent to [`Notification::dismiss`]; the view routes the request
    /// to its own owning registry, so dismissing a view issued by another
    /// registry never touches this one.
    pub fn dismiss(
        &self,
        notification: &Notification,
    ) -> bool {
        notification.dismiss()
    }

    /// Cancels a placement made earlier.
    ///
    /// Equivalent to [`NotificationPlacement::cancel`]. Used by scopes to
    /// bulk-cancel without materializing [`Notification`] views.
    pub fn cancel(
        &self,
        placement: &NotificationPlacement,
    ) -> bool {
        placement.cancel()
    }

    /// Newest-first snapshot of every live entry.
    pub fn notifications(&self) -> Result<Vec<Notification>> {
        self.snapshot(None, None)
    }

    /// Newest-first snapshot of entries whose key equals `key`.
    pub fn notifications_by_key(
        &self,
        key: &str,
    ) -> Result<Vec<Notification>> {
        self.snapshot(Some(key), None)
    }

    /// Newest-first snapshot of entries whose key equals `key` and whose
    /// uri filter accepts `uri`.
    pub fn notifications_for(
        &self,
        key: &str,
        uri: &str,
    ) -> Result<Vec<Notification>> {
        self.snapshot(Some(key), Some(uri))
    }

    fn snapshot(
        &self,
        key: Option<&str>,
        uri: Option<&str>,
    ) -> Result<Vec<Notification>> {
        let state = self.inner.state.lock();
        if state.disposed {
            return Err(Error::Disposed("NotificationRegistry"));
        }

        if state.entries.is_empty() {
            return Ok(Vec::new());
        }

        let registry = Arc::downgrade(&self.inner);

        // Single-entry fast path: no reverse traversal needed.
        if state.entries.len() == 1 {
            return Ok(state
                .entries
                .values()
                .filter(|entry| entry.matches(key, uri))
                .map(|entry| entry.to_view(registry.clone()))
                .collect());
        }

        let mut views = Vec::new();
        for entry in state.entries.values().rev() {
            if entry.matches(key, uri) {
                views.push(entry.to_view(registry.clone()));
            }
        }

        Ok(views)
    }

    /// Number of live entries.
    pub fn len(&self) -> Result<usize> {
        let state = self.inner.state.lock();
        if state.disposed {
            return Err(Error::Disposed("NotificationRegistry"));
        }
        Ok(state.entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.state.lock().disposed
    }

    /// Clears all entries and marks the registry dead. Idempotent.
    ///
    /// Fires the change signal exactly once, on the first call. Pending
    /// expiration timers observe the disposed flag at fire time and leave
    /// the cleared state alone; subsequent mutations are silent no-ops
    /// while queries return [`Error::Disposed`].
    pub fn dispose(&self) {
        let cleared = {
            let mut state = self.inner.state.lock();
            if state.disposed {
                false
            } else {
                state.disposed = true;
                state.entries.clear();
                true
            }
        };

        if cleared {
            debug!("notification registry disposed");
            self.inner.signal.notify();
        }
    }

    /// A scope that tracks the placements made through it and can cancel
    /// them as a unit.
    pub fn create_scope(&self) -> RegistryScope {
        RegistryScope::new(self.clone())
    }

    /// A recorder that captures every placement attempt made through it
    /// while forwarding to this registry.
    pub fn create_recorder(&self) -> RegistryRecorder {
        RegistryRecorder::new(self.clone())
    }
}

impl Default for NotificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
