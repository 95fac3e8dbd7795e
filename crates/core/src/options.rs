use serde::{Deserialize, Serialize};

/// Error-handling policy for the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Any structural problem aborts the parse with a [`ParseError`](crate::ParseError)
    Strict,
    /// Structural problems are repaired locally and parsing always completes
    #[default]
    Tolerant,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Strict => "strict",
            ParseMode::Tolerant => "tolerant",
        }
    }
}

/// Configuration for parsing a tree block
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Strict or tolerant error handling
    pub mode: ParseMode,
    /// Spaces per tab when normalizing leading whitespace
    pub tab_width: usize,
    /// Spaces per nesting level for plain-indentation lines
    pub indent_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Tolerant,
            tab_width: 2,
            indent_width: 2,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width.max(1);
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert_eq!(opts.mode, ParseMode::Tolerant);
        assert_eq!(opts.tab_width, 2);
        assert_eq!(opts.indent_width, 2);
    }

    #[test]
    fn test_builder() {
        let opts = ParseOptions::new()
            .with_mode(ParseMode::Strict)
            .with_tab_width(4)
            .with_indent_width(4);
        assert_eq!(opts.mode, ParseMode::Strict);
        assert_eq!(opts.tab_width, 4);
        assert_eq!(opts.indent_width, 4);
    }

    #[test]
    fn test_zero_widths_are_clamped() {
        let opts = ParseOptions::new().with_tab_width(0).with_indent_width(0);
        assert_eq!(opts.tab_width, 1);
        assert_eq!(opts.indent_width, 1);
    }
}
