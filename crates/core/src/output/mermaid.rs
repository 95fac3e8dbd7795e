use crate::models::{NodeKind, TreeNode};

/// Render the tree as a Mermaid `graph TD` description.
///
/// Nodes get sequential synthetic ids (`n0`, `n1`, ...) in pre-order, folder
/// labels a trailing `/`, and one edge per parent/child relation.
pub fn render_mermaid(nodes: &[TreeNode]) -> String {
    let mut out = String::from("graph TD\n");
    let mut next_id = 0;
    for node in nodes {
        write_node(&mut out, node, None, &mut next_id);
    }
    out
}

fn write_node(out: &mut String, node: &TreeNode, parent: Option<usize>, next_id: &mut usize) {
    let id = *next_id;
    *next_id += 1;

    let mut label = node.name.replace('"', "&quot;");
    if node.kind == NodeKind::Folder {
        label.push('/');
    }
    out.push_str(&format!("  n{id}[\"{label}\"]\n"));
    if let Some(parent) = parent {
        out.push_str(&format!("  n{parent} --> n{id}\n"));
    }
    for child in &node.children {
        write_node(out, child, Some(id), next_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::tree::parse_tree_block;

    fn parse(input: &str) -> Vec<TreeNode> {
        parse_tree_block(input, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_header_and_preorder_ids() {
        let mermaid = render_mermaid(&parse("src/\n  app/\n    page.tsx\n  lib.rs"));
        assert!(mermaid.starts_with("graph TD\n"));
        assert!(mermaid.contains("n0[\"src/\"]"));
        assert!(mermaid.contains("n1[\"app/\"]"));
        assert!(mermaid.contains("n2[\"page.tsx\"]"));
        assert!(mermaid.contains("n3[\"lib.rs\"]"));
    }

    #[test]
    fn test_edges_follow_parentage() {
        let mermaid = render_mermaid(&parse("src/\n  app/\n    page.tsx\n  lib.rs"));
        assert!(mermaid.contains("n0 --> n1"));
        assert!(mermaid.contains("n1 --> n2"));
        assert!(mermaid.contains("n0 --> n3"));
        assert!(!mermaid.contains("n0 --> n2"));
    }

    #[test]
    fn test_folder_labels_get_slash() {
        let mermaid = render_mermaid(&parse("vendor/\nmain.rs"));
        assert!(mermaid.contains("n0[\"vendor/\"]"));
        assert!(mermaid.contains("n1[\"main.rs\"]"));
    }

    #[test]
    fn test_quotes_in_labels_escaped() {
        let mermaid = render_mermaid(&parse("\"notes\".txt"));
        assert!(mermaid.contains("&quot;notes&quot;.txt"));
        assert!(!mermaid.contains("[\"\"notes"));
    }

    #[test]
    fn test_roots_have_no_incoming_edge() {
        let mermaid = render_mermaid(&parse("a/\nb/"));
        assert!(!mermaid.contains("--> n0"));
        assert!(!mermaid.contains("--> n1\n  n1"));
    }
}
