//! Document tree model
//!
//! The analyzer works on an owned, arena-backed tree rather than on the
//! parser's own types. This keeps the tree `Send` (so analysis futures can be
//! spawned) and lets tests build trees by hand, including shapes an HTML5
//! parser never emits such as duplicate attributes.

mod parser;

pub use parser::{parse_document, read_document};

/// Index of a node inside its [`Document`]
pub type NodeId = usize;

/// Classification of a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
    Doctype(DoctypeData),
}

/// Tag name and attributes of an element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lower-case local tag name
    pub name: String,

    /// Attributes in source order; duplicate keys are kept
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Returns every value of the attributes named `key`
    pub fn attr_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attrs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A `<!DOCTYPE ...>` declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctypeData {
    pub name: String,
    pub public_id: String,
    pub system_id: String,
}

impl DoctypeData {
    /// The full declared content: name, public id and system id, space separated
    pub fn declared(&self) -> String {
        [&self.name, &self.public_id, &self.system_id]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A single node with the ids of its children
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    children: Vec<NodeId>,
}

impl Node {
    pub fn element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A rooted, acyclic document tree
///
/// Node 0 is always the document root. Nodes are only ever appended under an
/// existing parent, so the tree can never contain a cycle.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists
        false
    }

    /// Returns the node with the given id
    ///
    /// Ids are only handed out by this document, so lookups never miss.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].children.first().copied()
    }

    /// Appends a new node as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Appends an element with the given tag name and attributes
    pub fn append_element(&mut self, parent: NodeId, name: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.append(parent, NodeKind::Element(ElementData::new(name, attrs)))
    }

    /// Appends a text node
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeKind::Text(text.to_string()))
    }

    /// Iterates `id` and all of its descendants in depth-first pre-order
    ///
    /// Uses an explicit stack, so deeply nested markup cannot exhaust the call stack.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![id],
        }
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.document.node(id);
        self.stack.extend(node.children().iter().rev());
        Some((id, node))
    }
}
