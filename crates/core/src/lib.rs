//! Treefence Core Library
//!
//! Parses ASCII-art directory trees, as found in fenced `tree` blocks in
//! Markdown documentation, into a structured tree of typed nodes and renders
//! that structure as HTML, a Mermaid diagram, plain text, or JSON.
//!
//! # Features
//!
//! - Interprets box-drawing connector notation (`├─`, `│`, `└─`) and plain
//!   space indentation, mixed freely within one block
//! - Tab/space normalization with configurable tab and indent widths
//! - Heuristic file-vs-folder classification for unmarked leaves
//!   (extension dots, all-caps names like `LICENSE`)
//! - Strict mode that fails on malformed structure with exact line numbers,
//!   and tolerant mode (the default) that repairs and always completes
//! - Pure and synchronous: no I/O, no shared state
//!
//! # Example
//!
//! ```
//! use treefence_core::{parse_tree_block, render_text, ParseOptions};
//!
//! let block = "src/\n├─ app/\n│  └─ page.tsx";
//! let nodes = parse_tree_block(block, &ParseOptions::default()).unwrap();
//! assert_eq!(render_text(&nodes), "src/\n  app/\n    page.tsx\n");
//! ```

pub mod error;
mod indent;
pub mod models;
pub mod options;
pub mod output;
pub mod tokenizer;
pub mod tree;

// Re-exports for convenience
pub use error::ParseError;
pub use models::{NodeKind, TreeNode};
pub use options::{ParseMode, ParseOptions};
pub use output::{
    render, render_html, render_json, render_mermaid, render_text, FormatError, HtmlOptions,
    OutputFormat, RenderOptions,
};
pub use tokenizer::{tokenize_lines, LineToken};
pub use tree::{build_tree, build_tree_with, classify_leaf, parse_tree_block, ClassifyLeaf};
