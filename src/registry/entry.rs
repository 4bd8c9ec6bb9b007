use std::sync::Weak;
use std::time::SystemTime;

use super::core::RegistryInner;
use super::notification::Notification;
use crate::NotificationMessage;

/// Internal record binding a message to its slot in the owning registry.
///
/// Identity is the sequence id assigned at insertion, not the message value:
/// two structurally identical messages placed twice are distinct entries.
/// Sequence ids are monotonically increasing and never reused, so a handle
/// holding a stale id simply finds nothing to remove.
pub(crate) struct ManagedEntry {
    seq: u64,
    message: NotificationMessage,
    placed_at: SystemTime,
}

impl ManagedEntry {
    pub(crate) fn new(
        seq: u64,
        message: NotificationMessage,
        placed_at: SystemTime,
    ) -> Self {
        Self {
            seq,
            message,
            placed_at,
        }
    }

    /// Applies the query filters: exact key equality and uri filter match.
    pub(crate) fn matches(
        &self,
        key: Option<&str>,
        uri: Option<&str>,
    ) -> bool {
        if let Some(uri) = uri {
            if !self.message.uri_filter().is_match(uri) {
                return false;
            }
        }

        if let Some(key) = key {
            if self.message.key() != Some(key) {
                return false;
            }
        }

        true
    }

    /// Projects the entry into an immutable consumer-facing view.
    pub(crate) fn to_view(
        &self,
        registry: Weak<RegistryInner>,
    ) -> Notification {
        Notification::new(registry, self.seq, &self.message, self.placed_at)
    }
}
