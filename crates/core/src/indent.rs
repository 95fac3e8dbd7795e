//! Leading-whitespace and connector interpretation for a single raw line.
//!
//! Two indentation idioms are supported and resolved independently per line:
//! box-drawing connector runs (`│  ├─ name`) and plain space indentation
//! (`    name`). Either may appear anywhere in the same block.

use crate::error::{gate, ParseError};
use crate::options::ParseOptions;

/// Vertical continuation glyph; one occurrence is one nesting level
const VERTICAL: char = '│';
/// Branch glyphs marking a child entry
const TEE: char = '├';
const ELBOW: char = '└';
/// Horizontal rule glyphs that may trail a branch glyph
const HORIZONTAL: char = '─';

/// Result of resolving one raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedLine {
    /// Zero-based nesting depth
    pub level: usize,
    /// Residual content with indentation and connectors stripped, trimmed.
    /// May be empty; the caller owns the skip-vs-fail decision.
    pub content: String,
}

/// Interpret one raw line's leading whitespace and connector run.
///
/// `line` is the 1-based source line number used in diagnostics.
pub(crate) fn resolve_indent(
    raw: &str,
    line: usize,
    options: &ParseOptions,
) -> Result<ResolvedLine, ParseError> {
    let normalized = normalize_tabs(raw, line, options)?;
    let mut chars = normalized.chars().peekable();
    let mut level = 0;

    // Indentation-unit scan: connector-plus-spaces units and plain space
    // runs are additive, one pass left to right.
    loop {
        match chars.peek() {
            Some(&VERTICAL) => {
                chars.next();
                let mut spaces = 0;
                while chars.peek() == Some(&' ') {
                    chars.next();
                    spaces += 1;
                }
                level += 1;
                if spaces == 0 {
                    // A bare connector ends the indentation run.
                    gate(options.mode, ParseError::EmptyConnector { line })?;
                    break;
                }
            }
            Some(&' ') => {
                let mut run = 0;
                while chars.peek() == Some(&' ') {
                    chars.next();
                    run += 1;
                }
                if run % options.indent_width != 0 {
                    gate(
                        options.mode,
                        ParseError::MisalignedSpaces {
                            line,
                            run,
                            unit: options.indent_width,
                        },
                    )?;
                }
                level += run / options.indent_width;
            }
            _ => break,
        }
    }

    // Branch prefix: `├` or `└`, any run of horizontal rules, one optional
    // space. Adds one level on top of the indentation scan.
    if matches!(chars.peek(), Some(&TEE) | Some(&ELBOW)) {
        chars.next();
        while matches!(chars.peek(), Some(&HORIZONTAL) | Some(&'-')) {
            chars.next();
        }
        if chars.peek() == Some(&' ') {
            chars.next();
        }
        level += 1;
    }

    let content = chars.collect::<String>().trim().to_string();
    Ok(ResolvedLine { level, content })
}

/// Expand tabs in the leading whitespace run to `tab_width` spaces.
///
/// A run mixing tabs and spaces is a structural error in strict mode; the
/// expansion itself is applied in both modes.
fn normalize_tabs(raw: &str, line: usize, options: &ParseOptions) -> Result<String, ParseError> {
    // Spaces and tabs are single-byte, so the char count is a byte offset.
    let run_len = raw.chars().take_while(|c| *c == ' ' || *c == '\t').count();
    let run = &raw[..run_len];
    if run.contains(' ') && run.contains('\t') {
        gate(options.mode, ParseError::MixedIndentation { line })?;
    }
    if !run.contains('\t') {
        return Ok(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len() + run_len * options.tab_width);
    for c in run.chars() {
        if c == '\t' {
            for _ in 0..options.tab_width {
                out.push(' ');
            }
        } else {
            out.push(' ');
        }
    }
    out.push_str(&raw[run_len..]);
    Ok(out)
}
