//! Modal backdrop click rule.

use crate::dom::MODAL_CLASS;

/// What a document click means for modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// The click landed on a modal backdrop: hide that modal.
    CloseModal,
    /// Anything else.
    Ignore,
}

/// Classifies a click by the classes of its target element.
///
/// Only the target itself counts: a click inside the modal's content has a
/// descendant as target and is ignored.
#[must_use]
pub fn classify_click<'a, I>(target_classes: I) -> ClickAction
where
    I: IntoIterator<Item = &'a str>,
{
    if target_classes.into_iter().any(|c| c == MODAL_CLASS) {
        ClickAction::CloseModal
    } else {
        ClickAction::Ignore
    }
}
