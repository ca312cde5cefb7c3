//! Engine Configuration

use std::path::PathBuf;

/// How rule blocks are ordered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Tag selectors alphabetically, then ids and classes alphabetically
    #[default]
    Alphabetical,

    /// First-appearance order of the identifiers in this HTML file
    ByHtml(PathBuf),
}

/// Engine configuration options
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Ordering policy
    pub mode: SortMode,

    /// Overwrite each stylesheet instead of returning the output only
    pub in_place: bool,
}

impl Config {
    pub fn by_html(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: SortMode::ByHtml(path.into()),
            ..Default::default()
        }
    }

    pub fn in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }
}
