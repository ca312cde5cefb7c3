//! Stylesheet output
//!
//! Every block is preceded by a blank line; a non-empty comment sits on
//! the line directly above its selector. Declarations are indented by
//! four spaces and terminated with `;`.

use sortcss_css::StylesheetModel;

/// Render an ordered model as CSS text
pub fn render(model: &StylesheetModel) -> String {
    let mut out = String::new();

    for (selector, rule) in model.iter() {
        out.push('\n');
        if !rule.comment.is_empty() {
            out.push_str(&rule.comment);
            out.push('\n');
        }

        out.push_str(&format!("{selector} {{\n"));
        for property in &rule.properties {
            out.push_str(&format!("    {property};\n"));
        }
        out.push_str("}\n");
    }

    out
}
