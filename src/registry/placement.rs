use std::sync::Weak;

use super::core::RegistryInner;

/// Opaque handle referencing one placed entry for later cancellation.
///
/// Pairs the owning registry with the sequence id captured at placement
/// time. Sequence ids are never reused, so a handle can only ever remove
/// the exact entry it was issued for; once that entry is gone the handle
/// is permanently stale and cancelling through it is a no-op.
#[derive(Debug, Clone)]
pub struct NotificationPlacement {
    registry: Weak<RegistryInner>,
    seq: u64,
}

impl NotificationPlacement {
    pub(crate) fn new(
        registry: Weak<RegistryInner>,
        seq: u64,
    ) -> Self {
        Self { registry, seq }
    }

    /// True while the referenced entry is still present in a live registry.
    pub fn is_live(&self) -> bool {
        match self.registry.upgrade() {
            Some(inner) => inner.contains(self.seq),
            None => false,
        }
    }

    /// Removes the referenced entry if it is still present.
    ///
    /// Returns `true` when a removal actually happened; stale handles and
    /// disposed or dropped registries yield `false` without a change signal.
    pub fn cancel(&self) -> bool {
        RegistryInner::remove_entry(&self.registry, self.seq)
    }
}
