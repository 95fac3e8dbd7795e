use serde::{Deserialize, Serialize};

/// Classification of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        }
    }
}

/// A finalized node in the parsed tree.
///
/// Children preserve source line order. A node with children is always a
/// folder; a childless node may be either kind, resolved at finalize time
/// by the classification policy. Nodes are never mutated after the parse
/// that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display label, trimmed, trailing `/` removed
    pub name: String,
    /// File or folder, fixed at finalize time
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ordered child nodes; empty for leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Total node count of this subtree, self included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }
}
