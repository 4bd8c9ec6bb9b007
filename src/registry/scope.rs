use parking_lot::Mutex;
use tracing::debug;

use super::core::NotificationRegistry;
use super::placement::NotificationPlacement;
use crate::NotificationMessage;

/// A bounded grouping of placements, cancellable as a unit.
///
/// The scope delegates each placement to its parent registry and records
/// the returned handle locally; the parent never learns which scope placed
/// what. [`RegistryScope::close`] cancels every recorded placement that is
/// still live and seals the scope: further placements through it become
/// silent no-ops, matching the parent's own disposed-mutation policy.
///
/// Disposing the parent needs nothing from the scope. The parent's clear
/// already removed the entries, so a later `close` finds only stale handles
/// and each cancellation is a no-op.
pub struct RegistryScope {
    parent: NotificationRegistry,
    state: Mutex<ScopeState>,
}

struct ScopeState {
    placements: Vec<NotificationPlacement>,
    closed: bool,
}

impl RegistryScope {
    pub(crate) fn new(parent: NotificationRegistry) -> Self {
        Self {
            parent,
            state: Mutex::new(ScopeState {
                placements: Vec::new(),
                closed: false,
            }),
        }
    }

    /// Places a message through the scope.
    ///
    /// Delegates to the parent and tracks the resulting handle for bulk
    /// cancellation. Suppressed placements (`None`-typed, pre-expired,
    /// disposed parent) are not tracked. Returns `None` without touching
    /// the parent once the scope is closed.
    pub fn place(
        &self,
        message: NotificationMessage,
    ) -> Option<NotificationPlacement> {
        if self.state.lock().closed {
            return None;
        }

        let placement = self.parent.place(message)?;

        let mut state = self.state.lock();
        if state.closed {
            // Closed while the parent placement was in flight; the entry
            // must not outlive the scope that created it.
            drop(state);
            placement.cancel();
            return None;
        }
        state.placements.push(placement.clone());

        Some(placement)
    }

    /// Cancels every placement created through this scope and seals it.
    ///
    /// Cancellation order is arbitrary; handles whose entries are already
    /// gone are no-ops. Idempotent: a second close finds nothing tracked.
    pub fn close(&self) {
        let drained = {
            let mut state = self.state.lock();
            state.closed = true;
            std::mem::take(&mut state.placements)
        };

        if drained.is_empty() {
            return;
        }

        let mut cancelled = 0usize;
        for placement in &drained {
            if placement.cancel() {
                cancelled += 1;
            }
        }
        debug!(tracked = drained.len(), cancelled, "closed notification scope");
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of still-tracked placements.
    pub fn tracked(&self) -> usize {
        self.state.lock().placements.len()
    }

    pub fn parent(&self) -> &NotificationRegistry {
        &self.parent
    }
}

impl Drop for RegistryScope {
    fn drop(&mut self) {
        self.close();
    }
}
