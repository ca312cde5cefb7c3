//! sortcss Engine
//!
//! Reorders the rule blocks of a stylesheet, either alphabetically or in
//! the order their selectors first appear in an HTML document.
//!
//! # Example
//! ```rust,ignore
//! use sortcss_engine::{Engine, Config, SortMode};
//!
//! let engine = Engine::new(Config::default());
//! let processed = engine.process("style.css")?;
//! print!("{}", processed.output);
//! ```

mod config;
mod engine;
mod serializer;
mod sorter;

pub use config::{Config, SortMode};
pub use engine::{Engine, EngineError, Processed};
pub use serializer::render;
pub use sorter::{leading_token, sort_by_html, sort_by_keys, SortStrategy};

// Re-export sub-crates for advanced usage
pub use sortcss_css as css;
pub use sortcss_html as html;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
