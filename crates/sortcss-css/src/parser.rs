//! CSS Parser using cssparser
//!
//! Walks the stylesheet's top-level tokens, comments included, and
//! produces one `ParsedCssRule` per comment or style rule. At-rules are
//! skipped.

use crate::{CssError, ParsedCssRule};
use cssparser::{ParseError, Parser, ParserInput, SourcePosition, Token};

/// CSS Parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Split a stylesheet into comment and style rule nodes, in source order
    pub fn parse(&self, css: &str) -> Result<Vec<ParsedCssRule>, CssError> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rules = Vec::new();

        loop {
            let start = parser.position();
            let token = match parser.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::WhiteSpace(_)
                | Token::CDO
                | Token::CDC
                | Token::Semicolon
                | Token::CloseCurlyBracket => {}
                Token::Comment(_) => {
                    rules.push(ParsedCssRule::Comment(parser.slice_from(start).to_string()));
                }
                Token::AtKeyword(name) => {
                    tracing::debug!("Skipping unsupported at-rule @{}", name);
                    skip_at_rule(&mut parser);
                }
                first => rules.push(self.parse_style_rule(&mut parser, start, first)?),
            }
        }

        tracing::debug!("Parsed {} CSS rule nodes", rules.len());
        Ok(rules)
    }

    /// Consume the rest of a prelude and its block. `first` is the token
    /// that started the rule and has already been consumed.
    ///
    /// The selector text drops comments and collapses whitespace runs to a
    /// single space, so `nav\na` and `nav a` name the same selector.
    fn parse_style_rule<'i>(
        &self,
        parser: &mut Parser<'i, '_>,
        start: SourcePosition,
        first: Token<'i>,
    ) -> Result<ParsedCssRule, CssError> {
        let line = parser.current_source_location().line + 1;
        let mut selector_text = String::new();
        let mut token_start = start;
        let mut token = first;

        loop {
            match token {
                Token::CurlyBracketBlock => break,
                Token::Comment(_) => {}
                Token::WhiteSpace(_) => {
                    if !selector_text.is_empty() && !selector_text.ends_with(' ') {
                        selector_text.push(' ');
                    }
                }
                Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                    skip_nested_block(parser);
                    selector_text.push_str(parser.slice_from(token_start));
                }
                _ => selector_text.push_str(parser.slice_from(token_start)),
            }

            token_start = parser.position();
            token = match parser.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => {
                    return Err(CssError::ParseError {
                        line,
                        message: format!(
                            "selector `{}` has no declaration block",
                            selector_text.trim()
                        ),
                    });
                }
            };
        }

        let declarations = parser
            .parse_nested_block(|block| Ok::<_, ParseError<'i, ()>>(declaration_pieces(block)))
            .map_err(|e| CssError::ParseError {
                line: e.location.line + 1,
                message: format!("{:?}", e.kind),
            })?;

        Ok(ParsedCssRule::Style {
            selector_text: selector_text.trim_end().to_string(),
            declarations,
        })
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw declarations of a block, split on its top-level `;` tokens.
///
/// Comments are removed. Semicolons inside strings, functions and other
/// nested blocks belong to their token and do not split.
fn declaration_pieces(block: &mut Parser<'_, '_>) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    loop {
        let start = block.position();
        let token = match block.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comment(_) => continue,
            Token::Semicolon => {
                pieces.push(std::mem::take(&mut current));
                continue;
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => skip_nested_block(block),
            _ => {}
        }

        current.push_str(block.slice_from(start));
    }
    pieces.push(current);

    pieces
}

fn skip_nested_block<'i>(parser: &mut Parser<'i, '_>) {
    let _ = parser.parse_nested_block(|inner| {
        while inner.next_including_whitespace_and_comments().is_ok() {}
        Ok::<_, ParseError<'i, ()>>(())
    });
}

/// Skip an at-rule up to its terminating `;` or past its block
fn skip_at_rule(parser: &mut Parser<'_, '_>) {
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Semicolon | Token::CurlyBracketBlock) {
            break;
        }
    }
}
