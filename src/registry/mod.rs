mod change;
mod core;
mod entry;
mod notification;
mod placement;
mod recorder;
mod scope;

pub use self::core::NotificationRegistry;
pub use change::ChangeListener;
pub use notification::Notification;
pub use placement::NotificationPlacement;
pub use recorder::RegistryRecorder;
pub use scope::RegistryScope;

#[cfg(test)]
mod recorder_test;
