//! Diagnostic codes for lexical problems.
//!
//! Codes follow the format `{prefix}{number:04}`, so a user can grep the
//! documentation for the exact code printed next to a diagnostic.
//!
//! ```
//! use lexc_util::diagnostic::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::E_UNTERMINATED_STRING.as_str(), "E0101");
//! ```

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g. "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E0101-E0199)
    // =========================================================================

    /// E0101: String constant reaches end of input without a closing `"`
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 101);
    /// E0102: Character constant reaches end of input without a closing `'`
    pub const E_UNTERMINATED_CHAR: Self = Self::new("E", 102);
    /// E0103: Block comment reaches end of input without a closing `@` + backtick
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 103);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
