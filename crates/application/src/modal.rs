//! Modal show/hide helpers

use std::sync::Arc;

use fitflow_domain::{
    dom::{MODAL_VISIBLE_CLASS, NodeId},
    modal::{ClickAction, classify_click},
};

use crate::ports::Document;

/// Shows and hides modals by element id.
pub struct ModalController<D: Document> {
    document: Arc<D>,
}

impl<D: Document> ModalController<D> {
    /// Creates a controller over the given document.
    pub const fn new(document: Arc<D>) -> Self {
        Self { document }
    }

    /// Makes the modal with the given id visible. Unknown ids are ignored.
    pub fn open(&self, modal_id: &str) {
        if let Some(modal) = self.document.element_by_id(modal_id) {
            self.document.add_class(modal, MODAL_VISIBLE_CLASS);
        }
    }

    /// Hides the modal with the given id. Unknown ids are ignored.
    pub fn close(&self, modal_id: &str) {
        if let Some(modal) = self.document.element_by_id(modal_id) {
            self.document.remove_class(modal, MODAL_VISIBLE_CLASS);
        }
    }

    /// Applies the backdrop rule to a click on `target`.
    pub fn handle_click(&self, target: NodeId) -> ClickAction {
        let classes = self.document.classes(target);
        let action = classify_click(classes.iter().map(String::as_str));
        if action == ClickAction::CloseModal {
            self.document.remove_class(target, MODAL_VISIBLE_CLASS);
        }
        action
    }
}
