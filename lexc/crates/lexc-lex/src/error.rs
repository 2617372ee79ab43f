//! Error types for the lexer crate.
//!
//! Lexical problems never fail a scan; they classify as invalid tokens and
//! are reported through the diagnostic handler. The only fatal condition is
//! not being able to read the source at all.

use thiserror::Error;

/// Fatal lexer error.
#[derive(Error, Debug)]
pub enum LexError {
    /// The source could not be read.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LexError.
pub type Result<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_display() {
        let err = LexError::from(io::Error::new(io::ErrorKind::NotFound, "program.txt"));
        assert_eq!(err.to_string(), "failed to read source: program.txt");
    }

    #[test]
    fn test_question_mark_conversion() {
        fn read() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(LexError::Io(_))));
    }
}
