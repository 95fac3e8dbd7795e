use crate::options::ParseMode;
use thiserror::Error;

/// Structural parse error, always carrying the 1-based source line number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line}: mixed tabs and spaces in indentation")]
    MixedIndentation { line: usize },
    #[error("Line {line}: indentation of {run} spaces is not a multiple of {unit}")]
    MisalignedSpaces { line: usize, run: usize, unit: usize },
    #[error("Line {line}: empty content after connector")]
    EmptyConnector { line: usize },
    #[error("Line {line}: empty tree line")]
    EmptyLine { line: usize },
    #[error("Line {line}: invalid empty node name")]
    EmptyName { line: usize },
    #[error("Line {line}: non-monotonic indentation jump")]
    NonMonotonicIndent { line: usize },
    #[error("Line {line}: invalid internal stack state")]
    InvalidState { line: usize },
}

impl ParseError {
    /// 1-based source line at which the problem was detected
    pub fn line(&self) -> usize {
        match self {
            ParseError::MixedIndentation { line }
            | ParseError::MisalignedSpaces { line, .. }
            | ParseError::EmptyConnector { line }
            | ParseError::EmptyLine { line }
            | ParseError::EmptyName { line }
            | ParseError::NonMonotonicIndent { line }
            | ParseError::InvalidState { line } => *line,
        }
    }

    /// Short machine-readable category name
    pub fn category(&self) -> &'static str {
        match self {
            ParseError::MixedIndentation { .. } => "mixed-indentation",
            ParseError::MisalignedSpaces { .. } => "misaligned-spaces",
            ParseError::EmptyConnector { .. } => "empty-connector",
            ParseError::EmptyLine { .. } => "empty-line",
            ParseError::EmptyName { .. } => "empty-name",
            ParseError::NonMonotonicIndent { .. } => "non-monotonic-indent",
            ParseError::InvalidState { .. } => "invalid-state",
        }
    }
}

/// Single decision point for the strict/tolerant contract.
///
/// Strict mode fails with the given diagnostic; tolerant mode logs it and
/// lets the caller apply the documented fallback (clamp, truncate, drop).
pub(crate) fn gate(mode: ParseMode, error: ParseError) -> Result<(), ParseError> {
    match mode {
        ParseMode::Strict => Err(error),
        ParseMode::Tolerant => {
            log::debug!(
                "repaired {} on line {}: {}",
                error.category(),
                error.line(),
                error
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_line_number() {
        let err = ParseError::MixedIndentation { line: 7 };
        assert_eq!(err.line(), 7);
        assert!(err.to_string().contains("Line 7"));
    }

    #[test]
    fn test_gate_strict_fails() {
        let result = gate(ParseMode::Strict, ParseError::EmptyName { line: 3 });
        assert_eq!(result, Err(ParseError::EmptyName { line: 3 }));
    }

    #[test]
    fn test_gate_tolerant_proceeds() {
        let result = gate(ParseMode::Tolerant, ParseError::EmptyName { line: 3 });
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_categories_are_distinct() {
        let errors = [
            ParseError::MixedIndentation { line: 1 },
            ParseError::MisalignedSpaces {
                line: 1,
                run: 3,
                unit: 2,
            },
            ParseError::EmptyConnector { line: 1 },
            ParseError::EmptyLine { line: 1 },
            ParseError::EmptyName { line: 1 },
            ParseError::NonMonotonicIndent { line: 1 },
            ParseError::InvalidState { line: 1 },
        ];
        let mut seen: Vec<&str> = errors.iter().map(|e| e.category()).collect();
        seen.dedup();
        assert_eq!(seen.len(), errors.len());
    }
}
