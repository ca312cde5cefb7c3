//! sortcss HTML
//!
//! Turns an HTML document into the ordered list of tags, ids and classes
//! it uses, as they first appear in the document.

mod node;
mod parser;
mod flatten;

pub use node::{Attributes, Element, HtmlDocument, HtmlNode};
pub use parser::HtmlParser;
pub use flatten::{flatten, IdentifierSequence};

/// Parse an HTML string and flatten it into its identifier sequence
pub fn identifiers_in_order(html: &str) -> Result<IdentifierSequence, HtmlError> {
    let document = HtmlParser::new().parse(html)?;
    Ok(flatten(&document))
}

/// HTML parsing error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
