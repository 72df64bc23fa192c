//! Notification sink rendering alerts into the page.

use std::sync::Arc;

use fitflow_application::ports::{Document, NotificationSink};
use fitflow_domain::{
    DISPLAY_DURATION, Notification,
    dom::{CONTAINER_CLASS, NewElement},
};
use tokio::runtime::{Handle, TryCurrentError};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

/// Shows notifications as `alert` elements at the top of `.container`.
///
/// Each alert is removed [`DISPLAY_DURATION`] after it was shown by a
/// detached task on the given runtime. The removal cannot be cancelled.
pub struct DomAlertSink<D: Document + 'static> {
    document: Arc<D>,
    runtime: Handle,
}

impl<D: Document + 'static> DomAlertSink<D> {
    /// Creates a sink scheduling removals on `runtime`.
    pub const fn new(document: Arc<D>, runtime: Handle) -> Self {
        Self { document, runtime }
    }

    /// Creates a sink on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn from_current(document: Arc<D>) -> Result<Self, TryCurrentError> {
        Ok(Self::new(document, Handle::try_current()?))
    }
}

impl<D: Document + 'static> NotificationSink for DomAlertSink<D> {
    fn notify(&self, notification: Notification) {
        let Some(container) = self.document.first_by_class(CONTAINER_CLASS) else {
            warn!(message = %notification.message, "no alert container on page, notification dropped");
            return;
        };

        let element = NewElement::new("div")
            .with_classes(notification.classes())
            .with_text(notification.message);
        let alert = self.document.prepend_child(container, element);
        debug!(id = %notification.id, kind = %notification.kind, "alert shown");

        let document = Arc::clone(&self.document);
        let deadline = Instant::now() + DISPLAY_DURATION;
        let id = notification.id;
        self.runtime.spawn(async move {
            sleep_until(deadline).await;
            document.remove(alert);
            debug!(%id, "alert removed");
        });
    }
}
