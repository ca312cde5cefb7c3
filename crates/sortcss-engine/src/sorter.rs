//! Rule ordering
//!
//! Both strategies read the model and return a new one; the input is
//! never reordered in place.

use sortcss_css::{CssRule, StylesheetModel};
use sortcss_html::IdentifierSequence;

/// Ordering strategy for a stylesheet model
#[derive(Debug, Clone, Copy)]
pub enum SortStrategy<'a> {
    /// Tag selectors first, then ids and classes, each alphabetical
    Lexicographic,
    /// Mirror the first-appearance order of an HTML document
    HtmlOrder(&'a IdentifierSequence),
}

impl SortStrategy<'_> {
    pub fn apply(&self, model: &StylesheetModel) -> StylesheetModel {
        match self {
            SortStrategy::Lexicographic => sort_by_keys(model),
            SortStrategy::HtmlOrder(identifiers) => sort_by_html(model, identifiers),
        }
    }
}

fn is_id_or_class(selector: &str) -> bool {
    selector.starts_with(['.', '#'])
}

/// Tag selectors alphabetically, followed by id and class selectors
/// alphabetically. Comparison is case-sensitive on the whole selector.
pub fn sort_by_keys(model: &StylesheetModel) -> StylesheetModel {
    let (mut tags, mut ids_classes): (Vec<_>, Vec<_>) =
        model.iter().partition(|(selector, _)| !is_id_or_class(selector));

    tags.sort_by(|a, b| a.0.cmp(b.0));
    ids_classes.sort_by(|a, b| a.0.cmp(b.0));

    tags.into_iter().chain(ids_classes).map(owned).collect()
}

/// First piece of a selector split on spaces and colons.
///
/// `a:hover` gives `a`, `.card > .title` gives `.card`. A selector made
/// only of separators, such as `::selection`, has none.
pub fn leading_token(selector: &str) -> Option<&str> {
    selector
        .split([' ', ':'])
        .find(|piece| !piece.is_empty())
        .map(str::trim)
}

/// Order selectors by the HTML identifier sequence.
///
/// For each identifier, every not yet placed selector whose leading token
/// equals it is placed, in model order. Selectors that match no identifier
/// are left out.
pub fn sort_by_html(model: &StylesheetModel, identifiers: &IdentifierSequence) -> StylesheetModel {
    let candidates: Vec<_> = model
        .iter()
        .map(|(selector, rule)| (leading_token(selector), selector, rule))
        .collect();
    let mut placed = vec![false; candidates.len()];
    let mut ordered = Vec::with_capacity(candidates.len());

    for identifier in identifiers.iter() {
        for (i, (token, selector, rule)) in candidates.iter().enumerate() {
            if !placed[i] && *token == Some(identifier) {
                placed[i] = true;
                ordered.push((*selector, *rule));
            }
        }
    }

    for ((_, selector, _), _) in candidates.iter().zip(&placed).filter(|(_, placed)| !**placed) {
        tracing::debug!("Dropping `{}`: no matching element in HTML", selector);
    }

    ordered.into_iter().map(owned).collect()
}

fn owned((selector, rule): (&str, &CssRule)) -> (String, CssRule) {
    (selector.to_string(), rule.clone())
}
