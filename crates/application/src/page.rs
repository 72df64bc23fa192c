//! Page lifecycle wiring
//!
//! The host calls [`PageScript::ready`] once the document is loaded and
//! forwards every click to [`PageScript::click`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use fitflow_domain::{dom::NodeId, modal::ClickAction};

use crate::modal::ModalController;
use crate::navigation::NavHighlighter;
use crate::ports::Document;

/// Page-level behavior of the front end.
pub struct PageScript<D: Document> {
    modals: ModalController<D>,
    navigation: NavHighlighter<D>,
    ready: AtomicBool,
}

impl<D: Document> PageScript<D> {
    /// Creates the script for a document.
    pub fn new(document: Arc<D>) -> Self {
        Self {
            modals: ModalController::new(Arc::clone(&document)),
            navigation: NavHighlighter::new(document),
            ready: AtomicBool::new(false),
        }
    }

    /// Runs the page-ready step. Only the first call has any effect.
    ///
    /// Returns true if this call performed the initialization.
    pub fn ready(&self) -> bool {
        if self.ready.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.navigation.apply();
        true
    }

    /// Handles a click anywhere in the document.
    pub fn click(&self, target: NodeId) -> ClickAction {
        self.modals.handle_click(target)
    }

    /// Returns the modal controller.
    pub const fn modals(&self) -> &ModalController<D> {
        &self.modals
    }
}
