//! Element tree for parsed markup documents.
//!
//! This is deliberately not a document-object implementation: a parsed
//! element carries only the handful of fields the layout synthesizer
//! consumes (tag name, id, class tokens, inline style text, text content,
//! `placeholder`/`alt`). There are no text or comment nodes — text is
//! flattened onto the owning element by the markup parser.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, providing O(1) access and traversal without borrow
//! checker issues. The node at [`NodeId::ROOT`] is a synthetic element
//! standing in for the document body; it anchors the top-level elements
//! and is never itself rendered.

/// A type-safe index into the element tree.
///
/// `NodeId` provides O(1) access to any node in the tree without
/// borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// The data carried by a single parsed element.
///
/// Attribute extraction is first-occurrence-wins and limited to the
/// attributes the synthesizer cares about; everything else on a tag is
/// ignored by the parser.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Tag name, normalized to ASCII lowercase.
    pub tag_name: String,
    /// Value of the `id` attribute, if present.
    pub id: Option<String>,
    /// Class tokens from the `class` attribute, split on whitespace.
    /// Order is preserved: insertion order equals source order, which the
    /// style resolver relies on.
    pub classes: Vec<String>,
    /// Raw text of the `style` attribute (unparsed declarations).
    pub inline_style: String,
    /// Trimmed text content. When the element has nested children this is
    /// the inner content with all nested tag markup stripped out.
    pub text: String,
    /// Value of the `placeholder` attribute (inputs).
    pub placeholder: Option<String>,
    /// Value of the `alt` attribute (images).
    pub alt: Option<String>,
}

impl ElementData {
    /// Create element data for a tag, normalizing the name to lowercase.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Self::default()
        }
    }
}

/// A node in the element tree: its data plus parent/child links.
#[derive(Debug, Clone)]
pub struct ElementNode {
    /// The element's parsed data.
    pub data: ElementData,
    /// Parent node, `None` only for the synthetic root.
    pub parent: Option<NodeId>,
    /// Ordered child list (source order).
    pub children: Vec<NodeId>,
}

/// Arena-based element tree with O(1) node access.
///
/// All nodes live in a contiguous vector, using indices for all
/// relationships. The synthetic root (the document body stand-in) is
/// created up front at [`NodeId::ROOT`]. The tree is acyclic by
/// construction: [`ElementTree::append_child`] only links a node under one
/// parent, and nodes are allocated before they are attached.
#[derive(Debug, Clone)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
}

impl ElementTree {
    /// Create a new tree with just the synthetic root element.
    #[must_use]
    pub fn new() -> Self {
        let root = ElementNode {
            data: ElementData::new("body"),
            parent: None,
            children: Vec::new(),
        };
        ElementTree { nodes: vec![root] }
    }

    /// Get the synthetic root node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ElementNode> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ElementNode> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree (including the synthetic root).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true: the root always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, data: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the element data of a node.
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).map(|n| &n.data)
    }

    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}
