//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to an owned `HtmlDocument`.
//! Comments, doctypes and processing instructions are dropped.

use crate::{Element, HtmlDocument, HtmlError, HtmlNode};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into a document tree.
    ///
    /// html5ever always builds an `html`/`head`/`body` shell. When the
    /// source does not open with one of those tags it is a fragment, and
    /// the children of the synthesized `head` and `body` become the roots.
    pub fn parse(&self, html: &str) -> Result<HtmlDocument, HtmlError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut roots = Vec::new();
        for child in dom.document.children.borrow().iter() {
            if let Some(node) = self.convert_node(child) {
                roots.push(node);
            }
        }

        if !declares_document_shell(html) {
            roots = unwrap_shell(roots);
        }

        let document = HtmlDocument::new(roots);
        tracing::debug!("Parsed HTML document with {} top-level nodes", document.roots.len());
        Ok(document)
    }

    /// Convert an RcDom node to our tree format
    fn convert_node(&self, handle: &Handle) -> Option<HtmlNode> {
        match &handle.data {
            NodeData::Element { name, attrs, .. } => {
                let mut element = Element::new(name.local.to_string());

                for attr in attrs.borrow().iter() {
                    match &*attr.name.local {
                        "id" => element.attributes.id = Some(attr.value.to_string()),
                        "class" => {
                            element.attributes.classes =
                                attr.value.split_ascii_whitespace().map(String::from).collect();
                        }
                        _ => {}
                    }
                }

                for child in handle.children.borrow().iter() {
                    if let Some(node) = self.convert_node(child) {
                        element.children.push(node);
                    }
                }

                Some(HtmlNode::Element(element))
            }
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(HtmlNode::Text(text))
                }
            }
            NodeData::Document
            | NodeData::Doctype { .. }
            | NodeData::Comment { .. }
            | NodeData::ProcessingInstruction { .. } => None,
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the first tag of the source is `html`, `head` or `body`.
///
/// Comments, doctypes, processing instructions and end tags before it are
/// skipped.
fn declares_document_shell(html: &str) -> bool {
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        rest = &rest[open..];

        if let Some(after) = rest.strip_prefix("<!--") {
            match after.find("-->") {
                Some(end) => rest = &after[end + 3..],
                None => return false,
            }
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            match rest.find('>') {
                Some(end) => rest = &rest[end + 1..],
                None => return false,
            }
        } else {
            let name: String = rest[1..]
                .chars()
                .take_while(char::is_ascii_alphanumeric)
                .collect();
            if name.is_empty() {
                // End tag or a stray `<`
                rest = &rest[1..];
                continue;
            }
            return matches!(name.to_ascii_lowercase().as_str(), "html" | "head" | "body");
        }
    }

    false
}

/// Replace the synthesized `html` element by its head and body content
fn unwrap_shell(roots: Vec<HtmlNode>) -> Vec<HtmlNode> {
    let mut unwrapped = Vec::new();
    for root in roots {
        match root {
            HtmlNode::Element(html) if html.name == "html" => {
                for section in html.children {
                    match section {
                        HtmlNode::Element(section) if section.name == "head" || section.name == "body" => {
                            unwrapped.extend(section.children);
                        }
                        other => unwrapped.push(other),
                    }
                }
            }
            other => unwrapped.push(other),
        }
    }
    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        let roots: Vec<_> = doc.root_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(roots, vec!["html"]);

        let html_el = doc.root_elements().next().unwrap();
        let sections: Vec<_> = html_el.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(sections, vec!["head", "body"]);
    }

    #[test]
    fn test_parse_fragment() {
        let html = "<div><span>Text</span></div><p></p>";
        let doc = HtmlParser::new().parse(html).unwrap();

        // The synthesized shell is removed for fragments
        let roots: Vec<_> = doc.root_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(roots, vec!["div", "p"]);
    }

    #[test]
    fn test_attributes() {
        let html = r#"<body><div id="main" class="a  b c" data-x="1"></div></body>"#;
        let doc = HtmlParser::new().parse(html).unwrap();

        let body = doc
            .root_elements()
            .next()
            .and_then(|html| html.child_elements().find(|e| e.name == "body"))
            .unwrap();
        let div = body.child_elements().next().unwrap();

        assert_eq!(div.attributes.id.as_deref(), Some("main"));
        assert_eq!(div.attributes.classes, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_declares_document_shell() {
        assert!(declares_document_shell("<!DOCTYPE html><HTML>"));
        assert!(declares_document_shell("<body class=\"x\">"));
        assert!(!declares_document_shell("<div>body</div>"));
        assert!(!declares_document_shell("<bodyguard></bodyguard>"));
        assert!(declares_document_shell("<!-- page -->\n<head></head>"));
        assert!(!declares_document_shell("</p><div><html>"));
    }

    #[test]
    fn test_commented_shell_is_still_a_fragment() {
        let html = "<!-- <html> --><div><p></p></div>";
        let doc = HtmlParser::new().parse(html).unwrap();

        let roots: Vec<_> = doc.root_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(roots, vec!["div"]);
    }
}
