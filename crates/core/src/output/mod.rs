mod html;
mod json;
mod mermaid;
mod text;

pub use html::{render_html, HtmlOptions};
pub use json::render_json;
pub use mermaid::render_mermaid;
pub use text::render_text;

use crate::models::TreeNode;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Mermaid,
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Mermaid => "mermaid",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Rendering options shared across formats
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// CSS class for the root element of HTML output
    pub root_class: Option<String>,
}

/// Render a finalized tree in the specified format.
///
/// Only JSON serialization has a failure path; the other renderers are
/// infallible string transforms.
pub fn render(
    nodes: &[TreeNode],
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Html => Ok(render_html(
            nodes,
            &HtmlOptions {
                root_class: options.root_class.clone(),
            },
        )),
        OutputFormat::Mermaid => Ok(render_mermaid(nodes)),
        OutputFormat::Text => Ok(render_text(nodes)),
        OutputFormat::Json => render_json(nodes),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::tree::parse_tree_block;

    #[test]
    fn test_render_dispatch() {
        let nodes = parse_tree_block("src/\n  main.rs", &ParseOptions::default()).unwrap();
        let opts = RenderOptions::default();
        assert!(render(&nodes, OutputFormat::Html, &opts)
            .unwrap()
            .starts_with("<ul"));
        assert!(render(&nodes, OutputFormat::Mermaid, &opts)
            .unwrap()
            .starts_with("graph TD"));
        assert!(render(&nodes, OutputFormat::Text, &opts)
            .unwrap()
            .starts_with("src/"));
        assert!(render(&nodes, OutputFormat::Json, &opts)
            .unwrap()
            .contains("\"main.rs\""));
    }
}
