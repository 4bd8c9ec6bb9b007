use parking_lot::Mutex;

use super::core::NotificationRegistry;
use super::placement::NotificationPlacement;
use crate::NotificationMessage;

/// A passive observer capturing every placement attempt.
///
/// The recorder forwards each message to its parent registry and appends an
/// owned copy to its recorded list whether or not the parent inserted the
/// entry: `None`-typed and pre-expired messages are recorded too, and the
/// recording outlives expiration of the live entries. Useful for tests and
/// telemetry that need the full attempt history rather than the live view.
///
/// The recorder never removes parent entries.
pub struct RegistryRecorder {
    parent: NotificationRegistry,
    recorded: Mutex<Vec<NotificationMessage>>,
}

impl RegistryRecorder {
    pub(crate) fn new(parent: NotificationRegistry) -> Self {
        Self {
            parent,
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Records the message and forwards it to the parent.
    ///
    /// The returned handle mirrors the parent's placement result; the
    /// recording itself happens unconditionally, before the forward, so
    /// even a placement into a disposed parent is captured.
    pub fn place(
        &self,
        message: NotificationMessage,
    ) -> Option<NotificationPlacement> {
        self.recorded.lock().push(message.clone());
        self.parent.place(message)
    }

    /// Snapshot of every placement attempt since creation or the last
    /// [`RegistryRecorder::reset`], in attempt order.
    pub fn recorded(&self) -> Vec<NotificationMessage> {
        self.recorded.lock().clone()
    }

    /// Clears the recorded history. Live parent entries are untouched.
    pub fn reset(&self) {
        self.recorded.lock().clear();
    }

    pub fn parent(&self) -> &NotificationRegistry {
        &self.parent
    }
}
