use crate::models::{NodeKind, TreeNode};

/// Options for HTML rendering
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS class applied to the outermost `<ul>`
    pub root_class: Option<String>,
}

/// Render the tree as a nested unordered list.
///
/// Folders become `<details open>` disclosure elements, so the output is
/// collapsible in a browser without any script. All labels are escaped.
pub fn render_html(nodes: &[TreeNode], options: &HtmlOptions) -> String {
    let mut out = String::new();
    match &options.root_class {
        Some(class) => out.push_str(&format!("<ul class=\"{}\">\n", escape_html(class))),
        None => out.push_str("<ul>\n"),
    }
    for node in nodes {
        write_node(&mut out, node, 1);
    }
    out.push_str("</ul>\n");
    out
}

fn write_node(out: &mut String, node: &TreeNode, depth: usize) {
    let pad = "  ".repeat(depth);
    let label = escape_html(&node.name);
    if node.kind == NodeKind::Folder {
        out.push_str(&format!(
            "{pad}<li><details open><summary>{label}</summary>\n"
        ));
        out.push_str(&format!("{pad}  <ul>\n"));
        for child in &node.children {
            write_node(out, child, depth + 2);
        }
        out.push_str(&format!("{pad}  </ul>\n"));
        out.push_str(&format!("{pad}</details></li>\n"));
    } else {
        out.push_str(&format!("{pad}<li>{label}</li>\n"));
    }
}

/// Escape the five HTML-sensitive characters
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
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
    fn test_folders_become_details() {
        let html = render_html(&parse("src/\n  main.rs"), &HtmlOptions::default());
        assert!(html.contains("<details open><summary>src</summary>"));
        assert!(html.contains("<li>main.rs</li>"));
    }

    #[test]
    fn test_root_class() {
        let opts = HtmlOptions {
            root_class: Some("markdown-tree".to_string()),
        };
        let html = render_html(&parse("src/"), &opts);
        assert!(html.starts_with("<ul class=\"markdown-tree\">"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let html = render_html(&parse("<a>&\"'.txt"), &HtmlOptions::default());
        assert!(html.contains("&lt;a&gt;&amp;&quot;&#39;.txt"));
        // No raw sensitive character survives in the label.
        assert!(!html.contains("<a>"));
    }

    #[test]
    fn test_leaf_folder_renders_empty_list() {
        let html = render_html(&parse("vendor/"), &HtmlOptions::default());
        assert!(html.contains("<summary>vendor</summary>"));
        assert!(html.contains("<ul>\n    </ul>"));
    }
}
