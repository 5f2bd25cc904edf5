//! Arena-backed markup tree.
//!
//! Nodes live in one `Vec` and refer to each other through [`NodeId`] handles.
//! Every node stores its parent handle and the ordered list of its children,
//! so the tree never needs shared ownership or parent pointers.
//!
//! - `parser`: html5ever (`RcDom` sink) to arena conversion
//! - `serializer`: HTML fragment serialization (innerHTML)

mod parser;
mod serializer;

pub use parser::ParseError;

/// Handle of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The document node.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (`None` for the document node and detached subtrees).
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Doctype { name: String },
    Element(ElementData),
    Text(String),
    Comment(String),
    ProcessingInstruction { target: String, data: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lower-cased local name for HTML elements.
    pub name: String,
    /// Attributes in source order; new attributes are appended.
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    /// Set an attribute, keeping its position when it already exists.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A parsed markup fragment.
///
/// Fragments are parsed as `<body>{fragment}</body>`, so the tree always has
/// the shape `#document > html > (head, body)`. [`Document::body`] is the
/// fragment container; [`Document::to_html`] serializes its content.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Document {
    /// Parse a markup fragment.
    pub fn parse(markup: &str) -> Result<Self, ParseError> {
        parser::parse_body(markup)
    }

    fn empty() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            body: NodeId::ROOT,
        }
    }

    /// The element wrapping the parsed fragment.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.name.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attr(name))
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|element| element.has_attr(name))
    }

    /// Set an attribute on an element. Non-element nodes are left alone.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.element_mut(id) {
            element.set_attr(name, value);
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Zero-based position among all child nodes of the parent.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        index
            .checked_sub(1)
            .and_then(|prev| self.children(parent).get(prev).copied())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        self.children(parent).get(index + 1).copied()
    }

    /// True when the node is still reachable from the document node.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == NodeId::ROOT {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants {
            document: self,
            stack,
        }
    }

    /// Element descendants of the document node, in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(NodeId::ROOT)
            .filter(|&id| self.element(id).is_some())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|child| self.get(child).and_then(Node::as_text))
            .collect()
    }

    /// Serialized content of a node (innerHTML).
    pub fn inner_html(&self, id: NodeId) -> String {
        serializer::inner_html(self, id)
    }

    /// Serialized content of the fragment container.
    pub fn to_html(&self) -> String {
        self.inner_html(self.body)
    }

    /// Replace the children of `id` with the parsed `markup` (innerHTML assignment).
    ///
    /// The previous children are detached, not freed; handles to them stay
    /// valid but are no longer attached to the document.
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) -> Result<(), ParseError> {
        let fragment = Document::parse(markup)?;

        let Some(node) = self.get_mut(id) else {
            return Ok(());
        };
        for child in std::mem::take(&mut node.children) {
            if let Some(child) = self.get_mut(child) {
                child.parent = None;
            }
        }

        for &child in fragment.children(fragment.body()) {
            self.import(&fragment, child, id);
        }
        Ok(())
    }

    /// Deep-copy `source` from another document under `parent`.
    fn import(&mut self, other: &Document, source: NodeId, parent: NodeId) {
        let Some(node) = other.get(source) else {
            return;
        };
        let id = self.append(parent, node.data.clone());
        for &child in &node.children {
            self.import(other, child, id);
        }
    }

    /// Create a node and append it as the last child of `parent`.
    fn append(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut node = Node::new(data);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        id
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.document.children(id).iter().rev().copied());
        Some(id)
    }
}
