use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::UriFilter;

/// Severity class of a notification.
///
/// [`NotificationType::None`] is a valid message value but is rejected by
/// placement as a silent no-op, so producers can pass through "nothing to
/// report" results without branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    None,
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            NotificationType::None => "none",
            NotificationType::Info => "info",
            NotificationType::Success => "success",
            NotificationType::Warning => "warning",
            NotificationType::Error => "error",
        };
        write!(f, "{name}")
    }
}

impl FromStr for NotificationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(NotificationType::None),
            "info" => Ok(NotificationType::Info),
            "success" => Ok(NotificationType::Success),
            "warning" => Ok(NotificationType::Warning),
            "error" => Ok(NotificationType::Error),
            other => Err(Error::InvalidArgument(format!(
                "unknown notification type: {other}"
            ))),
        }
    }
}

/// An immutable notification payload handed to a registry for placement.
///
/// Construct via [`NotificationMessage::new`] for the common case or
/// [`NotificationMessage::builder`] to set optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    notification_type: NotificationType,
    message: String,
    /// Grouping tag compared for exact equality when querying.
    key: Option<String>,
    /// Longer, secondary text for expanded rendering.
    description: Option<String>,
    /// Uri the notification links to when activated.
    target_uri: Option<String>,
    /// Restricts the routes the notification is shown on.
    uri_filter: UriFilter,
    /// Absolute instant after which the entry is auto-removed.
    expiration: Option<SystemTime>,
    /// Explicit placement timestamp; resolved against the registry clock
    /// when absent.
    timestamp: Option<SystemTime>,
    allow_dismiss: bool,
}

impl NotificationMessage {
    /// A message of the given type and text with every optional field at its
    /// default: no key, match-all uri filter, no expiration, dismissable.
    pub fn new(
        notification_type: NotificationType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            message: message.into(),
            key: None,
            description: None,
            target_uri: None,
            uri_filter: UriFilter::match_all(),
            expiration: None,
            timestamp: None,
            allow_dismiss: true,
        }
    }

    pub fn builder(
        notification_type: NotificationType,
        message: impl Into<String>,
    ) -> NotificationMessageBuilder {
        NotificationMessageBuilder {
            message: Self::new(notification_type, message),
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

    pub fn uri_filter(&self) -> &UriFilter {
        &self.uri_filter
    }

    pub fn expiration(&self) -> Option<SystemTime> {
        self.expiration
    }

    pub fn is_expirable(&self) -> bool {
        self.expiration.is_some()
    }

    pub fn timestamp(&self) -> Option<SystemTime> {
        self.timestamp
    }

    pub fn allow_dismiss(&self) -> bool {
        self.allow_dismiss
    }
}

/// Fluent builder for [`NotificationMessage`] optional fields.
pub struct NotificationMessageBuilder {
    message: NotificationMessage,
}

impl NotificationMessageBuilder {
    pub fn key(
        mut self,
        key: impl Into<String>,
    ) -> Self {
        self.message.key = Some(key.into());
        self
    }

    pub fn description(
        mut self,
        description: impl Into<String>,
    ) -> Self {
        self.message.description = Some(description.into());
        self
    }

    pub fn target_uri(
        mut self,
        target_uri: impl Into<String>,
    ) -> Self {
        self.message.target_uri = Some(target_uri.into());
        self
    }

    pub fn uri_filter(
        mut self,
        uri_filter: UriFilter,
    ) -> Self {
        self.message.uri_filter = uri_filter;
        self
    }

    pub fn expiration(
        mut self,
        expiration: SystemTime,
    ) -> Self {
        self.message.expiration = Some(expiration);
        self
    }

    pub fn timestamp(
        mut self,
        timestamp: SystemTime,
    ) -> Self {
        self.message.timestamp = Some(timestamp);
        self
    }

    pub fn allow_dismiss(
        mut self,
        allow_dismiss: bool,
    ) -> Self {
        self.message.allow_dismiss = allow_dismiss;
        self
    }

    pub fn build(self) -> NotificationMessage {
        self.message
    }
}
