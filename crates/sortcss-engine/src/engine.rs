//! Engine - Main entry point

use crate::{render, Config, SortMode, SortStrategy};
use sortcss_css::{parse_stylesheet, CssError};
use sortcss_html::{identifiers_in_order, HtmlError, IdentifierSequence};
use std::path::{Path, PathBuf};

/// The sortcss engine.
///
/// Holds the configuration and, in HTML mode, the identifier sequence of
/// the reference document, flattened once and shared by every file.
pub struct Engine {
    config: Config,
    identifiers: Option<IdentifierSequence>,
}

/// Result of processing one stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub path: PathBuf,
    /// Rendered stylesheet
    pub output: String,
    /// Whether `output` replaced the file contents
    pub written: bool,
}

impl Engine {
    /// Create a new engine with the given configuration.
    ///
    /// In HTML mode the document is read and flattened here.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        let identifiers = match &config.mode {
            SortMode::Alphabetical => None,
            SortMode::ByHtml(path) => {
                let html = read(path)?;
                let identifiers = identifiers_in_order(&html)?;
                tracing::info!(
                    "Loaded {} identifiers from {}",
                    identifiers.len(),
                    path.display()
                );
                Some(identifiers)
            }
        };

        Ok(Self { config, identifiers })
    }

    /// Engine ordering by an already flattened identifier sequence
    pub fn with_identifiers(config: Config, identifiers: IdentifierSequence) -> Self {
        Self {
            config,
            identifiers: Some(identifiers),
        }
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn strategy(&self) -> SortStrategy<'_> {
        match &self.identifiers {
            Some(identifiers) => SortStrategy::HtmlOrder(identifiers),
            None => SortStrategy::Lexicographic,
        }
    }

    /// Parse, reorder and render a stylesheet
    pub fn sort_css(&self, css: &str) -> Result<String, EngineError> {
        let model = parse_stylesheet(css)?;
        let ordered = self.strategy().apply(&model);

        if ordered.len() < model.len() {
            tracing::debug!(
                "{} of {} selectors not found in HTML",
                model.len() - ordered.len(),
                model.len()
            );
        }

        Ok(render(&ordered))
    }

    /// Sort one stylesheet file, overwriting it when configured in place
    pub fn process(&self, path: impl AsRef<Path>) -> Result<Processed, EngineError> {
        let path = path.as_ref();
        tracing::info!("Sorting: {}", path.display());

        let css = read(path)?;
        let output = self.sort_css(&css)?;

        if self.config.in_place {
            std::fs::write(path, &output).map_err(|source| EngineError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(Processed {
            path: path.to_path_buf(),
            output,
            written: self.config.in_place,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: Config::default(),
            identifiers: None,
        }
    }
}

fn read(path: &Path) -> Result<String, EngineError> {
    std::fs::read_to_string(path).map_err(|source| EngineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSS error: {0}")]
    Css(#[from] CssError),

    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_is_alphabetical() {
        let engine = Engine::default();
        assert!(matches!(engine.strategy(), SortStrategy::Lexicographic));
        assert!(!engine.config().in_place);
    }

    #[test]
    fn test_sort_css_alphabetical() {
        let output = Engine::default().sort_css("b{color:blue;}\na{color:red;}").unwrap();
        assert_eq!(output, "\na {\n    color: red;\n}\n\nb {\n    color: blue;\n}\n");
    }

    #[test]
    fn test_sort_css_by_identifiers() {
        let identifiers: IdentifierSequence = ["main", "h1"].into_iter().collect();
        let engine = Engine::with_identifiers(Config::default(), identifiers);

        let output = engine.sort_css("h1 { margin: 0 }\nmain { padding: 0 }\nfooter { top: 0 }").unwrap();
        assert_eq!(output, "\nmain {\n    padding: 0;\n}\n\nh1 {\n    margin: 0;\n}\n");
    }

    #[test]
    fn test_missing_html_file() {
        let result = Engine::new(Config::by_html("/nonexistent/page.html"));
        assert!(matches!(result, Err(EngineError::Read { .. })));
    }

    #[test]
    fn test_css_error_propagates() {
        let result = Engine::default().sort_css("a { color: red }\nb");
        assert!(matches!(result, Err(EngineError::Css(_))));
    }
}
