//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line underneath a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::error::{SnippetError, SnippetResult};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use lexc_util::{SourceSnippet, Span};
///
/// let snippet = SourceSnippet::from_span("int x = \"abc", Span::new(8, 12, 1, 9)).unwrap();
/// assert!(snippet.format().ends_with("        ^^^^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Extract the line a span starts on from `source`.
    ///
    /// The highlight runs from the span's column to the end of the span or
    /// the end of the line, whichever comes first.
    ///
    /// # Errors
    ///
    /// Fails when the span is the dummy span or names a line past the end of
    /// the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexc_util::{SourceSnippet, Span};
    ///
    /// let source = "int x;\nchar c = 'a";
    /// let snippet = SourceSnippet::from_span(source, Span::new(16, 18, 2, 10)).unwrap();
    /// assert_eq!(snippet.line, "char c = 'a");
    /// assert_eq!((snippet.start_column, snippet.end_column), (10, 12));
    /// ```
    pub fn from_span(source: &str, span: Span) -> SnippetResult<Self> {
        if span.is_dummy() {
            return Err(SnippetError::NoLocation);
        }

        let line_number = span.line as usize;
        let max_lines = source.lines().count().max(1);
        let text = source
            .lines()
            .nth(line_number - 1)
            .or(if line_number == 1 { Some("") } else { None })
            .ok_or(SnippetError::InvalidLineNumber {
                line: line_number,
                max_lines,
            })?;

        let start_column = span.column as usize;
        let line_len = text.chars().count();
        let end_column = (start_column + span.len().max(1)).min(line_len + 1).max(start_column);

        Ok(Self {
            line: text.to_string(),
            line_number,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed with its number and a caret line
    /// underneath pointing at the highlighted range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line, width = width);
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use lexc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use lexc_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unterminated block comment")
///     .code(DiagnosticCode::E_UNTERMINATED_COMMENT)
///     .span(Span::new(0, 2, 1, 1))
///     .help("close the comment with `@` followed by a backtick")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: Vec::new(),
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
