//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Phases never abort on bad input. They build a [`Diagnostic`] (usually
//! through [`DiagnosticBuilder`]) and emit it into a [`Handler`], which only
//! collects. Whoever owns the handler decides what to do with the result.
//!
//! ```
//! use lexc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use lexc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated character constant")
//!     .code(DiagnosticCode::E_UNTERMINATED_CHAR)
//!     .span(Span::new(8, 10, 1, 9))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the diagnostic in the usual compiler layout:
    ///
    /// ```text
    /// error[E0101]: unterminated string constant
    ///   --> line 3, column 5
    ///   3 | x = "abc
    ///     |     ^^^^
    ///   = help: close the string with `"`
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if !self.span.is_dummy() {
            write!(f, "\n  --> line {}, column {}", self.span.line, self.span.column)?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Emission takes `&self` so that several phases can share one handler.
///
/// ```
/// use lexc_util::diagnostic::{Diagnostic, Handler};
/// use lexc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("odd spacing", Span::DUMMY));
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Count the diagnostics carrying `code`
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.code == Some(code))
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("test", Span::DUMMY).with_help("help 1");
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_diagnostic_display_with_code_and_location() {
        let diag = Diagnostic::error("unterminated string constant", Span::new(4, 8, 3, 5))
            .with_code(DiagnosticCode::E_UNTERMINATED_STRING)
            .with_help("close the string with `\"`");
        let rendered = diag.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[E0101]: unterminated string constant");
        assert_eq!(lines[1], "  --> line 3, column 5");
        assert_eq!(lines[2], "  = help: close the string with `\"`");
    }

    #[test]
    fn test_diagnostic_display_without_location() {
        let diag = Diagnostic::warning("something odd", Span::DUMMY);
        assert_eq!(diag.to_string(), "warning: something odd");
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_count_code() {
        let handler = Handler::new();
        DiagnosticBuilder::error("a")
            .code(DiagnosticCode::E_UNTERMINATED_CHAR)
            .emit(&handler);
        handler.emit_diagnostic(Diagnostic::warning("b", Span::DUMMY));
        assert_eq!(handler.count_code(DiagnosticCode::E_UNTERMINATED_CHAR), 1);
        assert_eq!(handler.count_code(DiagnosticCode::E_UNTERMINATED_STRING), 0);
    }

    #[test]
    fn test_handler_take_empties() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("a", Span::DUMMY));
        let taken = handler.take();
        assert_eq!(taken.len(), 1);
        assert!(!handler.has_errors());
        assert!(handler.take().is_empty());
    }
}
