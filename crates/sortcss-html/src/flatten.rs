//! Tree flattening
//!
//! Walks the document depth-first and records every tag, `#id` and
//! `.class` the first time it shows up.

use crate::{Element, HtmlDocument, HtmlNode};
use indexmap::IndexSet;

/// Structural identifiers in first-appearance document order.
///
/// Each entry is a bare tag name, `#id` or `.class`, and appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSequence {
    identifiers: IndexSet<String>,
}

impl IdentifierSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    /// Position of an identifier in document order
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.identifiers.get_index_of(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.identifiers.iter().cloned().collect()
    }
}

/// Later repeats are dropped, the first position is kept
impl<S: Into<String>> FromIterator<S> for IdentifierSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            identifiers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IdentifierSequence {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}

/// Flatten a document into its identifier sequence.
///
/// When the top level (the children of `html`, or the roots when there is
/// no `html` element) holds a `body`, only the body subtree is walked and
/// `body` comes first. Otherwise the whole tree is walked from the roots.
pub fn flatten(document: &HtmlDocument) -> IdentifierSequence {
    let top_level: &[HtmlNode] = match document.root_elements().find(|e| e.name == "html") {
        Some(html) => &html.children,
        None => &document.roots,
    };

    let mut emitted = Vec::new();
    match top_level.iter().filter_map(HtmlNode::as_element).find(|e| e.name == "body") {
        Some(body) => {
            emitted.push(body.name.clone());
            emit_attributes(body, &mut emitted);
            walk(&body.children, &mut emitted);
        }
        None => walk(&document.roots, &mut emitted),
    }

    let sequence: IdentifierSequence = emitted.into_iter().collect();
    tracing::debug!("Flattened HTML into {} identifiers", sequence.len());
    sequence
}

fn walk(nodes: &[HtmlNode], out: &mut Vec<String>) {
    for element in nodes.iter().filter_map(HtmlNode::as_element) {
        emit_attributes(element, out);
        out.push(element.name.clone());
        walk(&element.children, out);
    }
}

fn emit_attributes(element: &Element, out: &mut Vec<String>) {
    if let Some(id) = &element.attributes.id {
        out.push(format!("#{id}"));
    }
    for class in &element.attributes.classes {
        out.push(format!(".{class}"));
    }
}
