use std::sync::Weak;
use std::time::SystemTime;

use super::core::RegistryInner;
use crate::NotificationMessage;
use crate::NotificationType;

/// Read-only projection of a live registry entry.
///
/// A view is a snapshot: it stays readable after the backing entry expires
/// or is removed, but [`Notification::dismiss`] then finds nothing to do.
/// The back-reference to the owning registry is only used to route dismiss
/// requests and never keeps the registry alive.
#[derive(Debug, Clone)]
pub struct Notification {
    registry: Weak<RegistryInner>,
    seq: u64,
    notification_type: NotificationType,
    message: String,
    key: Option<String>,
    description: Option<String>,
    target_uri: Option<String>,
    timestamp: SystemTime,
    allow_dismiss: bool,
}

impl Notification {
    pub(crate) fn new(
        registry: Weak<RegistryInner>,
        seq: u64,
        message: &NotificationMessage,
        timestamp: SystemTime,
    ) -> Self {
        Self {
            registry,
            seq,
            notification_type: message.notification_type(),
            message: message.message().to_string(),
            key: message.key().map(str::to_string),
            description: message.description().map(str::to_string),
            target_uri: message.target_uri().map(str::to_string),
            timestamp,
            allow_dismiss: message.allow_dismiss(),
        }
    }

    pub fn notification_type(&self) -> NotificationType {
        self.notification_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn target_uri(&self) -> Option<&str> {
        self.target_uri.as_deref()
    }

    /// Instant the entry was placed, resolved against the registry clock.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Rendering hint: whether the UI should offer a dismiss control.
    pub fn allow_dismiss(&self) -> bool {
        self.allow_dismiss
    }

    /// Removes the backing entry from the owning registry.
    ///
    /// Returns `true` when a removal actually happened. Dismissing an entry
    /// that already expired, was cancelled, or whose registry was disposed
    /// or dropped is a no-op and fires no change signal.
    pub fn dismiss(&self) -> bool {
        RegistryInner::remove_entry(&self.registry, self.seq)
    }
}
