//! Stylesheet model
//!
//! Folds parsed rule nodes into one entry per simple selector. Comma
//! groups are split, repeated selectors are merged, and each rule keeps
//! the comment that directly precedes it.

use indexmap::IndexMap;

/// A top-level node produced by [`crate::CssParser`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCssRule {
    /// Comment text including its `/* */` delimiters
    Comment(String),
    /// Style rule: selector list text and the raw declarations of its
    /// block, already split on `;`
    Style {
        selector_text: String,
        declarations: Vec<String>,
    },
}

/// Normalized data of one selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssRule {
    /// Leading comment, empty if none
    pub comment: String,
    /// `property: value` declarations without trailing semicolons
    pub properties: Vec<String>,
}

impl CssRule {
    pub fn new(comment: impl Into<String>, properties: Vec<String>) -> Self {
        Self {
            comment: comment.into(),
            properties,
        }
    }

    fn merge(&mut self, comment: &str, properties: Vec<String>) {
        self.comment.push_str(comment);
        self.properties.extend(properties);
    }
}

/// Selector to rule mapping, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetModel {
    rules: IndexMap<String, CssRule>,
}

impl StylesheetModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any rule for the same selector in place
    pub fn insert(&mut self, selector: impl Into<String>, rule: CssRule) {
        self.rules.insert(selector.into(), rule);
    }

    pub fn get(&self, selector: &str) -> Option<&CssRule> {
        self.rules.get(selector)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssRule)> {
        self.rules.iter().map(|(selector, rule)| (selector.as_str(), rule))
    }

    /// Sort every rule's declarations alphabetically
    pub fn sort_properties(&mut self) {
        for rule in self.rules.values_mut() {
            rule.properties.sort();
        }
    }

    /// The model with [`Self::sort_properties`] applied
    pub fn normalized(mut self) -> Self {
        self.sort_properties();
        self
    }
}

impl FromIterator<(String, CssRule)> for StylesheetModel {
    fn from_iter<I: IntoIterator<Item = (String, CssRule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StylesheetModel {
    type Item = (String, CssRule);
    type IntoIter = indexmap::map::IntoIter<String, CssRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

/// Comment waiting for the next style rule
#[derive(Debug, Default)]
enum PendingComment {
    #[default]
    Empty,
    Held(String),
}

impl PendingComment {
    fn take(&mut self) -> String {
        match std::mem::take(self) {
            PendingComment::Empty => String::new(),
            PendingComment::Held(text) => text,
        }
    }
}

/// Builds a [`StylesheetModel`] from parsed rule nodes
#[derive(Debug, Default)]
pub struct CssRuleParser {
    pending: PendingComment,
    model: StylesheetModel,
}

impl CssRuleParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from rule nodes in source order.
    ///
    /// Declarations keep their source order; see
    /// [`StylesheetModel::normalized`] for the sorted form.
    pub fn parse(rules: impl IntoIterator<Item = ParsedCssRule>) -> StylesheetModel {
        let mut parser = Self::new();
        for rule in rules {
            parser.feed(rule);
        }
        parser.finish()
    }

    /// Fold one rule node into the model
    pub fn feed(&mut self, rule: ParsedCssRule) {
        match rule {
            // Only the nearest comment sticks
            ParsedCssRule::Comment(text) => self.pending = PendingComment::Held(text),
            ParsedCssRule::Style {
                selector_text,
                declarations,
            } => {
                let comment = self.pending.take();
                let properties = normalize_declarations(&declarations);

                for selector in selector_text.split(',').map(str::trim) {
                    if selector.is_empty() {
                        continue;
                    }
                    self.model
                        .rules
                        .entry(selector.to_string())
                        .and_modify(|existing| existing.merge(&comment, properties.clone()))
                        .or_insert_with(|| CssRule::new(comment.clone(), properties.clone()));
                }
            }
        }
    }

    pub fn finish(self) -> StylesheetModel {
        tracing::debug!("Built stylesheet model with {} selectors", self.model.len());
        self.model
    }
}

/// Normalize raw declarations, dropping the empty ones
fn normalize_declarations(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|declaration| normalize_declaration(declaration))
        .filter(|declaration| !declaration.is_empty())
        .collect()
}

/// `  color :red\n` becomes `color: red`
fn normalize_declaration(raw: &str) -> String {
    let flat: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    match flat.split_once(':') {
        Some((name, value)) => format!("{}: {}", name.trim(), value.trim()).trim_end().to_string(),
        None => flat.trim().to_string(),
    }
}
