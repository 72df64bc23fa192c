//! Notification sink port

use fitflow_domain::{Notification, NotificationKind};

/// Port for showing transient notifications to the user.
///
/// Implementations take care of removing the notification once
/// [`fitflow_domain::DISPLAY_DURATION`] has elapsed.
pub trait NotificationSink: Send + Sync {
    /// Displays a notification.
    fn notify(&self, notification: Notification);

    /// Displays `message` with the given kind.
    fn show(&self, message: &str, kind: NotificationKind) {
        self.notify(Notification::new(message, kind));
    }
}
