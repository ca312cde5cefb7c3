use clap::Parser;
use sortcss_engine::{Config, Processed, SortMode};
use std::path::PathBuf;

/// Sorts CSS declarations. Without `--by-html` tags are sorted
/// alphabetically first, then ids and classes.
#[derive(Parser, Debug)]
#[command(name = "sortcss")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "# Examples:\n\n\
    ## Print style.css sorted alphabetically:\n\
    sortcss style.css\n\n\
    ## Rewrite style.css in the order used by index.html:\n\
    sortcss --by-html index.html -i style.css")]
pub struct Cli {
    /// CSS files to sort
    #[arg(value_name = "TARGET")]
    pub targets: Vec<PathBuf>,

    /// Order CSS declarations by the HTML document's order
    #[arg(long = "by-html", visible_alias = "by_html", value_name = "HTML")]
    pub by_html: Option<PathBuf>,

    /// Edit files in place
    #[arg(short = 'i', long = "in-place", visible_alias = "in_place", default_value_t = false)]
    pub in_place: bool,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            mode: match &self.by_html {
                Some(path) => SortMode::ByHtml(path.clone()),
                None => SortMode::Alphabetical,
            },
            in_place: self.in_place,
        }
    }
}

/// Line printed for a processed file: a confirmation when the file was
/// rewritten, the sorted stylesheet otherwise
pub fn report(processed: &Processed) -> String {
    if processed.written {
        format!("{} formatted successfully!", processed.path.display())
    } else {
        processed.output.clone()
    }
}
