//! Document vocabulary shared by the page helpers.

use std::fmt;

/// Class of the element alerts are inserted into.
pub const CONTAINER_CLASS: &str = "container";
/// Class marking a modal backdrop.
pub const MODAL_CLASS: &str = "modal";
/// Class making a modal visible.
pub const MODAL_VISIBLE_CLASS: &str = "show";
/// Class of the element holding the navigation links.
pub const NAV_LINKS_CLASS: &str = "nav-links";
/// Class marking the navigation link of the current page.
pub const NAV_ACTIVE_CLASS: &str = "active";

/// Handle to an element of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A link element and its raw `href` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The link element.
    pub node: NodeId,
    /// The `href` attribute as written in the markup.
    pub href: String,
}

/// A new element to insert into a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewElement {
    /// Tag name, e.g. `div`.
    pub tag: String,
    /// Class list.
    pub classes: Vec<String>,
    /// Text content.
    pub text: String,
}

impl NewElement {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Adds classes.
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
