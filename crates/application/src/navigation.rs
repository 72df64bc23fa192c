//! Active navigation link highlighting

use std::sync::Arc;

use fitflow_domain::{
    dom::{NAV_ACTIVE_CLASS, NAV_LINKS_CLASS},
    navigation::is_current_page,
};
use tracing::debug;

use crate::ports::Document;

/// Marks the navigation links pointing at the current page.
pub struct NavHighlighter<D: Document> {
    document: Arc<D>,
}

impl<D: Document> NavHighlighter<D> {
    /// Creates a highlighter over the given document.
    pub const fn new(document: Arc<D>) -> Self {
        Self { document }
    }

    /// Sets `active` on every matching link and clears it everywhere else.
    ///
    /// Returns the number of links left active.
    pub fn apply(&self) -> usize {
        let page = self.document.location();
        let mut active = 0;
        for link in self.document.links_within(NAV_LINKS_CLASS) {
            if is_current_page(&page, &link.href) {
                self.document.add_class(link.node, NAV_ACTIVE_CLASS);
                active += 1;
            } else {
                self.document.remove_class(link.node, NAV_ACTIVE_CLASS);
            }
        }
        debug!(path = page.path(), active, "navigation links highlighted");
        active
    }
}
