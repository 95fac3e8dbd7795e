use crate::models::{NodeKind, TreeNode};

/// Render the tree as plain indented text, one node per line.
///
/// Two spaces per depth level, `/` suffix on folders, pre-order. The output
/// is itself a valid space-indented tree block and re-parses to the same
/// shape.
pub fn render_text(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, 0);
    }
    out
}

fn write_node(out: &mut String, node: &TreeNode, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&node.name);
    if node.kind == NodeKind::Folder {
        out.push('/');
    }
    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
