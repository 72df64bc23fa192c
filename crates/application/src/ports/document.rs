//! Document port

use fitflow_domain::dom::{Link, NewElement, NodeId};
use url::Url;

/// Port over the page's document tree.
///
/// The document is shared by every helper on the page, so all methods take
/// `&self`. Operations on a node that no longer exists are no-ops.
pub trait Document: Send + Sync {
    /// Returns the URL of the current page.
    fn location(&self) -> Url;

    /// Finds the element with the given `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Finds the first element, in document order, carrying `class`.
    fn first_by_class(&self, class: &str) -> Option<NodeId>;

    /// Returns every link with an `href` under elements carrying `container_class`.
    fn links_within(&self, container_class: &str) -> Vec<Link>;

    /// Returns the class list of a node.
    fn classes(&self, node: NodeId) -> Vec<String>;

    /// Adds a class to a node.
    fn add_class(&self, node: NodeId, class: &str);

    /// Removes a class from a node.
    fn remove_class(&self, node: NodeId, class: &str);

    /// Inserts a new element as the first child of `parent`.
    fn prepend_child(&self, parent: NodeId, element: NewElement) -> NodeId;

    /// Detaches a node from the document.
    fn remove(&self, node: NodeId);
}
