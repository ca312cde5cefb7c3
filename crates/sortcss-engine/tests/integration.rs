//! Integration tests - Full pipeline from files to sorted output
//!
//! Tests the complete workflow: CSS (+ HTML) → model → order → text

use sortcss_engine::css::parse_stylesheet;
use sortcss_engine::html::identifiers_in_order;
use sortcss_engine::{render, sort_by_html, sort_by_keys, Config, Engine, SortMode};
use std::fs;

const PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
        <head><title>Shop</title></head>
        <body>
            <header id="top" class="bar">
                <nav><a href="/">Home</a></nav>
            </header>
            <main>
                <article class="card"><h2>Item</h2><p class="price">9</p></article>
            </main>
        </body>
    </html>
"#;

const STYLE: &str = r#"
/* prices */
.price { font-weight: bold; color: green; }
a:hover, a { color: red; }
h2 { margin: 0; }
.card > h2 { padding: 0; }
body { margin: 0; font-family: sans-serif; }
#top { position: sticky; }
.orphan { display: none; }
"#;

// ============================================================================
// FULL PIPELINE TESTS
// ============================================================================

#[test]
fn test_end_to_end_alphabetical() {
    let output = Engine::default().sort_css("b{color:blue;}\na{color:red;}").unwrap();
    let a = output.find("a {").unwrap();
    let b = output.find("b {").unwrap();
    assert!(a < b);
    assert!(output.contains("    color: red;\n"));
    assert!(output.contains("    color: blue;\n"));
}

#[test]
fn test_alphabetical_partition() {
    let model = parse_stylesheet(STYLE).unwrap();
    let sorted = sort_by_keys(&model);
    let keys: Vec<_> = sorted.selectors().collect();

    assert_eq!(
        keys,
        vec!["a", "a:hover", "body", "h2", "#top", ".card > h2", ".orphan", ".price"]
    );
}

#[test]
fn test_html_order_pipeline() {
    let identifiers = identifiers_in_order(PAGE).unwrap();
    let model = parse_stylesheet(STYLE).unwrap();
    let sorted = sort_by_html(&model, &identifiers);
    let keys: Vec<_> = sorted.selectors().collect();

    assert_eq!(
        keys,
        vec!["body", "#top", "a:hover", "a", ".card > h2", "h2", ".price"]
    );
}

#[test]
fn test_multiline_selector_matches_html() {
    let identifiers = identifiers_in_order("<nav><a href=\"/\">Home</a></nav>").unwrap();
    let model = parse_stylesheet("nav\na { color: red; }\nnav a { top: 0; }").unwrap();
    let sorted = sort_by_html(&model, &identifiers);

    assert_eq!(
        render(&sorted),
        "\nnav a {\n    color: red;\n    top: 0;\n}\n"
    );
}

#[test]
fn test_render_twice_is_identical() {
    let sorted = sort_by_keys(&parse_stylesheet(STYLE).unwrap());
    assert_eq!(render(&sorted), render(&sorted));
}

#[test]
fn test_full_output() {
    let css = "/* links */\na, p { color: red; }\np { margin: 0; }\n.x { top: 0; }";
    let output = Engine::default().sort_css(css).unwrap();

    assert_eq!(
        output,
        "\n/* links */\na {\n    color: red;\n}\n\
         \n/* links */\np {\n    color: red;\n    margin: 0;\n}\n\
         \n.x {\n    top: 0;\n}\n"
    );
}

// ============================================================================
// FILE PROCESSING
// ============================================================================

#[test]
fn test_process_prints_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let css_path = dir.path().join("style.css");
    fs::write(&css_path, "b { top: 0 }\na { top: 1 }").unwrap();

    let processed = Engine::default().process(&css_path).unwrap();

    assert!(!processed.written);
    assert!(processed.output.starts_with("\na {"));
    assert_eq!(fs::read_to_string(&css_path).unwrap(), "b { top: 0 }\na { top: 1 }");
}

#[test]
fn test_process_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let css_path = dir.path().join("style.css");
    fs::write(&css_path, "b { top: 0 }\na { top: 1 }").unwrap();

    let engine = Engine::new(Config::default().in_place(true)).unwrap();
    let processed = engine.process(&css_path).unwrap();

    assert!(processed.written);
    assert_eq!(fs::read_to_string(&css_path).unwrap(), processed.output);
}

#[test]
fn test_process_by_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let html_path = dir.path().join("index.html");
    let css_path = dir.path().join("style.css");
    fs::write(&html_path, PAGE).unwrap();
    fs::write(&css_path, STYLE).unwrap();

    let config = Config::by_html(&html_path);
    assert_eq!(config.mode, SortMode::ByHtml(html_path.clone()));

    let engine = Engine::new(config).unwrap();
    let processed = engine.process(&css_path).unwrap();

    assert!(processed.output.starts_with("\nbody {"));
    assert!(!processed.output.contains(".orphan"));
    assert!(processed.output.contains("/* prices */\n.price {"));
}

#[test]
fn test_process_missing_file() {
    let result = Engine::default().process("/nonexistent/style.css");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("/nonexistent/style.css"));
}
