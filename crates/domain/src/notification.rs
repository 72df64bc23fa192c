//! Transient user-facing notifications.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long an alert stays on screen before it is removed.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Neutral information (default).
    #[default]
    Info,
    /// A completed operation.
    Success,
    /// Something the user should look at.
    Warning,
    /// A failed operation.
    Error,
}

impl NotificationKind {
    /// Returns the kind as used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the modifier class, e.g. `alert-error`.
    #[must_use]
    pub fn modifier_class(self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a displayed notification, valid for its lifetime only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Generates a new time-ordered id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A message shown to the user for [`DISPLAY_DURATION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Lifecycle id.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Visual category.
    pub kind: NotificationKind,
}

impl Notification {
    /// Creates a notification of the given kind.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: NotificationId::generate(),
            message: message.into(),
            kind,
        }
    }

    /// Creates an informational notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Returns the classes of the rendered alert element.
    #[must_use]
    pub fn classes(&self) -> [String; 2] {
        ["alert".to_string(), self.kind.modifier_class()]
    }
}
