//! In-memory document tree.
//!
//! A minimal element tree implementing the `Document` port: tags, ids,
//! classes, text and `href`s. Nodes are never freed; removing one detaches
//! it so queries no longer reach it.

use fitflow_application::ports::Document;
use fitflow_domain::dom::{Link, NewElement, NodeId};
use parking_lot::RwLock;
use url::Url;

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    href: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn from_element(element: NewElement, parent: NodeId) -> Self {
        let mut node = Self {
            tag: element.tag.to_ascii_lowercase(),
            text: element.text,
            parent: Some(parent),
            ..Self::default()
        };
        for class in element.classes {
            node.add_class(&class);
        }
        node
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

#[derive(Debug)]
struct Tree {
    location: Url,
    nodes: Vec<Node>,
}

impl Tree {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Attached nodes in document order, root excluded.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(ROOT)
            .map(|root| root.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    fn is_attached(&self, mut id: NodeId) -> bool {
        loop {
            if id == ROOT {
                return true;
            }
            match self.node(id).and_then(|n| n.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn insert(&mut self, parent: NodeId, element: NewElement, first: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::from_element(element, parent));
        if let Some(parent) = self.node_mut(parent) {
            if first {
                parent.children.insert(0, id);
            } else {
                parent.children.push(id);
            }
        }
        id
    }
}

/// Document tree held in memory behind a lock.
///
/// # Example
///
/// ```
/// use fitflow_domain::dom::NewElement;
/// use fitflow_infrastructure::InMemoryDocument;
/// use url::Url;
///
/// let doc = InMemoryDocument::new(Url::parse("http://localhost:5000/socios").unwrap());
/// let nav = doc.append(doc.root(), NewElement::new("ul").with_classes(["nav-links"]));
/// let link = doc.append(nav, NewElement::new("a").with_text("Socios"));
/// doc.set_href(link, "/socios");
/// ```
#[derive(Debug)]
pub struct InMemoryDocument {
    tree: RwLock<Tree>,
}

impl InMemoryDocument {
    /// Creates an empty document (a bare `body`) at the given location.
    #[must_use]
    pub fn new(location: Url) -> Self {
        let body = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            tree: RwLock::new(Tree {
                location,
                nodes: vec![body],
            }),
        }
    }

    /// Returns the `body` element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Appends a new element as the last child of `parent`.
    pub fn append(&self, parent: NodeId, element: NewElement) -> NodeId {
        self.tree.write().insert(parent, element, false)
    }

    /// Sets the `id` attribute of a node.
    pub fn set_id(&self, node: NodeId, id: &str) {
        if let Some(node) = self.tree.write().node_mut(node) {
            node.id = Some(id.to_string());
        }
    }

    /// Sets the `href` attribute of a node.
    pub fn set_href(&self, node: NodeId, href: &str) {
        if let Some(node) = self.tree.write().node_mut(node) {
            node.href = Some(href.to_string());
        }
    }

    /// Changes the page location.
    pub fn set_location(&self, location: Url) {
        self.tree.write().location = location;
    }

    /// Returns true if the node carries `class`.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.read().node(node).is_some_and(|n| n.has_class(class))
    }

    /// Returns the text content of a node.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<String> {
        self.tree.read().node(node).map(|n| n.text.clone())
    }

    /// Returns the children of a node.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .read()
            .node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Returns true if the node is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.tree.read().is_attached(node)
    }
}

impl Document for InMemoryDocument {
    fn location(&self) -> Url {
        self.tree.read().location.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.read();
        tree.walk()
            .into_iter()
            .find(|&n| tree.node(n).is_some_and(|node| node.id.as_deref() == Some(id)))
    }

    fn first_by_class(&self, class: &str) -> Option<NodeId> {
        let tree = self.tree.read();
        tree.walk()
            .into_iter()
            .find(|&n| tree.node(n).is_some_and(|node| node.has_class(class)))
    }

    fn links_within(&self, container_class: &str) -> Vec<Link> {
        let tree = self.tree.read();
        tree.walk()
            .into_iter()
            .filter_map(|n| {
                let node = tree.node(n)?;
                if node.tag != "a" {
                    return None;
                }
                let href = node.href.clone()?;
                let mut ancestor = node.parent;
                while let Some(id) = ancestor {
                    let parent = tree.node(id)?;
                    if parent.has_class(container_class) {
                        return Some(Link { node: n, href });
                    }
                    ancestor = parent.parent;
                }
                None
            })
            .collect()
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.tree
            .read()
            .node(node)
            .map(|n| n.classes.clone())
            .unwrap_or_default()
    }

    fn add_class(&self, node: NodeId, class: &str) {
        if let Some(node) = self.tree.write().node_mut(node) {
            node.add_class(class);
        }
    }

    fn remove_class(&self, node: NodeId, class: &str) {
        if let Some(node) = self.tree.write().node_mut(node) {
            node.classes.retain(|c| c != class);
        }
    }

    fn prepend_child(&self, parent: NodeId, element: NewElement) -> NodeId {
        self.tree.write().insert(parent, element, true)
    }

    fn remove(&self, node: NodeId) {
        let mut tree = self.tree.write();
        let Some(parent) = tree.node_mut(node).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = tree.node_mut(parent) {
            parent.children.retain(|&c| c != node);
        }
    }
}
