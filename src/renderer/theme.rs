use super::{child_path, Node, RenderContext};
use crate::error::Result;
use crate::localization::localized_text;
use crate::records::Theme;
use serde_json::Value;

/// Format a theme as `{Code, Text}`.
pub fn format_theme(theme: &Theme, ctx: &RenderContext<'_>, path: &str) -> Result<Node> {
    let mut node = Node::new();
    node.insert("Code".to_string(), Value::String(theme.code.clone()));
    node.insert(
        "Text".to_string(),
        localized_text(&theme.text, ctx.mode, &child_path(path, "Text"))?,
    );
    Ok(node)
}

/// Format a list of themes, keeping their order.
pub fn format_themes(themes: &[Theme], ctx: &RenderContext<'_>, path: &str) -> Result<Vec<Value>> {
    themes
        .iter()
        .map(|theme| format_theme(theme, ctx, path).map(Value::Object))
        .collect()
}
