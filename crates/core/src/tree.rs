//! Tree assembly from the flat token sequence, plus leaf classification.

use crate::error::{gate, ParseError};
use crate::models::{NodeKind, TreeNode};
use crate::options::ParseOptions;
use crate::tokenizer::{tokenize_lines, LineToken};

/// Pluggable policy deciding the kind of an unmarked, childless node.
///
/// Structural rules (explicit `/`, presence of children) always win; the
/// policy only sees genuine leaves.
pub type ClassifyLeaf = fn(&str) -> NodeKind;

/// Mutable node under construction; becomes a [`TreeNode`] at finalize time
struct WorkNode {
    name: String,
    explicit_folder: bool,
    children: Vec<WorkNode>,
}

impl From<LineToken> for WorkNode {
    fn from(token: LineToken) -> Self {
        Self {
            name: token.name,
            explicit_folder: token.explicit_folder,
            children: Vec::new(),
        }
    }
}

/// Parse a full tree block into finalized root nodes.
///
/// Fails only in strict mode; tolerant mode always produces a best-effort
/// tree.
pub fn parse_tree_block(input: &str, options: &ParseOptions) -> Result<Vec<TreeNode>, ParseError> {
    let tokens = tokenize_lines(input, options)?;
    build_tree(tokens, options)
}

/// Assemble tokens into nested trees using the default leaf classifier.
pub fn build_tree(
    tokens: Vec<LineToken>,
    options: &ParseOptions,
) -> Result<Vec<TreeNode>, ParseError> {
    build_tree_with(tokens, options, classify_leaf)
}

/// Assemble tokens into nested trees with a caller-supplied leaf classifier.
///
/// Maintains an explicit stack of open nodes indexed by depth. A token
/// jumping more than one level deeper than the current path is a
/// non-monotonic indentation error in strict mode; tolerant mode clamps it
/// to the deepest open level.
pub fn build_tree_with(
    tokens: Vec<LineToken>,
    options: &ParseOptions,
    classify: ClassifyLeaf,
) -> Result<Vec<TreeNode>, ParseError> {
    let mut roots: Vec<WorkNode> = Vec::new();
    let mut stack: Vec<WorkNode> = Vec::new();

    for token in tokens {
        let mut level = token.level;
        if level > stack.len() {
            gate(
                options.mode,
                ParseError::NonMonotonicIndent { line: token.line },
            )?;
            level = stack.len();
        }
        while stack.len() > level {
            let done = stack
                .pop()
                .ok_or(ParseError::InvalidState { line: token.line })?;
            attach(&mut stack, &mut roots, done);
        }
        stack.push(WorkNode::from(token));
    }

    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, done);
    }

    Ok(roots
        .into_iter()
        .map(|node| finalize(node, classify))
        .collect())
}

fn attach(stack: &mut Vec<WorkNode>, roots: &mut Vec<WorkNode>, node: WorkNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn finalize(node: WorkNode, classify: ClassifyLeaf) -> TreeNode {
    let kind = if node.explicit_folder || !node.children.is_empty() {
        NodeKind::Folder
    } else {
        classify(&node.name)
    };
    TreeNode {
        name: node.name,
        kind,
        children: node
            .children
            .into_iter()
            .map(|child| finalize(child, classify))
            .collect(),
    }
}

/// Default heuristic for unmarked leaves.
///
/// An interior `.` (not first or last character) reads as a file extension.
/// Failing that, all-caps names like `LICENSE` or `README (draft)` are
/// treated as files. Everything else defaults to a folder.
pub fn classify_leaf(name: &str) -> NodeKind {
    let count = name.chars().count();
    let interior_dot = name
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < count);
    if interior_dot || is_all_caps(name) {
        NodeKind::File
    } else {
        NodeKind::Folder
    }
}

/// All-caps test on the head segment: take the substring before the first
/// space or `(`, drop non-letters, and compare the rest with its uppercase
/// form. Empty letter sets do not count.
fn is_all_caps(name: &str) -> bool {
    let head = name.split([' ', '(']).next().unwrap_or(name);
    let letters: String = head.chars().filter(|c| c.is_alphabetic()).collect();
    !letters.is_empty() && letters == letters.to_uppercase()
}
