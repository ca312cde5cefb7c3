//! HTML tree nodes
//!
//! A plain owned tree. Only the attributes that identify an element in a
//! stylesheet are kept.

/// A node of the parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Element(Element),
    Text(String),
}

/// Element node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name
    pub name: String,
    pub attributes: Attributes,
    /// Child nodes in source order
    pub children: Vec<HtmlNode>,
}

/// Attributes relevant to selector matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    /// Class names in declared order
    pub classes: Vec<String>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty()
    }
}

impl Element {
    /// Create an element without attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attributes.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attributes.classes.push(class.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<HtmlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(HtmlNode::as_element)
    }
}

impl HtmlNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        }
    }
}

impl From<Element> for HtmlNode {
    fn from(element: Element) -> Self {
        HtmlNode::Element(element)
    }
}

/// Parsed document: the top-level nodes in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDocument {
    pub roots: Vec<HtmlNode>,
}

impl HtmlDocument {
    pub fn new(roots: Vec<HtmlNode>) -> Self {
        Self { roots }
    }

    /// Top-level elements, skipping text
    pub fn root_elements(&self) -> impl Iterator<Item = &Element> {
        self.roots.iter().filter_map(HtmlNode::as_element)
    }

    pub fn is_empty(&self) -> bool {
        self.root_elements().next().is_none()
    }
}
