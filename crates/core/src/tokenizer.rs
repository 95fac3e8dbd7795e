use crate::error::{gate, ParseError};
use crate::indent::resolve_indent;
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

/// One tokenized tree line, ready for tree assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineToken {
    /// Content with indentation, connectors, and any trailing `/` stripped
    pub name: String,
    /// Zero-based nesting depth
    pub level: usize,
    /// True if the original content ended with `/`
    pub explicit_folder: bool,
    /// 1-based source line number, never renumbered
    pub line: usize,
}

/// Tokenize a full text block into ordered [`LineToken`]s.
///
/// Blank and whitespace-only lines are skipped silently. In tolerant mode,
/// lines that resolve to an empty name are dropped; in strict mode they
/// abort the parse.
pub fn tokenize_lines(input: &str, options: &ParseOptions) -> Result<Vec<LineToken>, ParseError> {
    let mut tokens = Vec::new();
    for (index, raw) in input.split('\n').enumerate() {
        let line = index + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() {
            continue;
        }
        let resolved = resolve_indent(raw, line, options)?;
        if resolved.content.is_empty() {
            // Connectors with nothing after them carry no node.
            gate(options.mode, ParseError::EmptyLine { line })?;
            continue;
        }
        let explicit_folder = resolved.content.ends_with('/');
        let name = resolved
            .content
            .strip_suffix('/')
            .unwrap_or(&resolved.content)
            .trim_end()
            .to_string();
        if name.is_empty() {
            gate(options.mode, ParseError::EmptyName { line })?;
            continue;
        }
        tokens.push(LineToken {
            name,
            level: resolved.level,
            explicit_folder,
            line,
        });
    }
    Ok(tokens)
}
