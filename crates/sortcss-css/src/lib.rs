//! sortcss CSS Parser
//!
//! Reads a stylesheet into a normalized model: one entry per simple
//! selector, each carrying its leading comment and its declarations.

mod parser;
mod model;

pub use parser::CssParser;
pub use model::{CssRule, CssRuleParser, ParsedCssRule, StylesheetModel};

/// Parse a CSS stylesheet into a normalized model.
///
/// Declarations within each selector come out alphabetically sorted.
pub fn parse_stylesheet(css: &str) -> Result<StylesheetModel, CssError> {
    let rules = CssParser::new().parse(css)?;
    Ok(CssRuleParser::parse(rules).normalized())
}

/// CSS parsing error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: u32, message: String },
}
