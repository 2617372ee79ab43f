//! Error types for lexc-util.

use thiserror::Error;

/// Error raised while extracting a source snippet for a diagnostic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    /// The span points at a line the source does not have.
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Line the span asked for (1-based)
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },

    /// The span is the dummy span and carries no location.
    #[error("Span carries no location")]
    NoLocation,
}

/// Result type alias for snippet extraction
pub type SnippetResult<T> = std::result::Result<T, SnippetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_display() {
        let err = SnippetError::InvalidLineNumber { line: 9, max_lines: 3 };
        assert_eq!(err.to_string(), "Invalid line number: 9 (source has 3 lines)");
    }

    #[test]
    fn test_no_location_display() {
        assert_eq!(SnippetError::NoLocation.to_string(), "Span carries no location");
    }
}
