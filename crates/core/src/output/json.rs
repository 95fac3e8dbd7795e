use super::FormatError;
use crate::models::TreeNode;

/// Render the tree as pretty-printed JSON
pub fn render_json(nodes: &[TreeNode]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(nodes).map_err(FormatError::from)
}

/// Render the tree as compact JSON
#[allow(dead_code)]
pub fn render_json_compact(nodes: &[TreeNode]) -> Result<String, FormatError> {
    serde_json::to_string(nodes).map_err(FormatError::from)
}
