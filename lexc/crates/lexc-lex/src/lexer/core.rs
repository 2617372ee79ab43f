//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the scan loop and the
//! bookkeeping shared by the specialised scanners in sibling modules.

use std::iter::FusedIterator;

use lexc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::classify::{char_value, classify, is_word_char};
use crate::cursor::Cursor;
use crate::sink::TokenSink;
use crate::tables;
use crate::token::Token;

/// What the scan loop is currently inside of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Mode {
    /// Ordinary text.
    Normal,
    /// After a line comment opener.
    LineComment,
    /// After a block comment opener; the span points at the opener.
    BlockComment(Span),
}

/// Counters gathered over a full scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens emitted.
    pub tokens: usize,
    /// Tokens that classified as invalid.
    pub invalid: usize,
    /// Line the cursor ended on.
    pub lines: u32,
    /// Whether the input ended inside a block comment.
    pub unterminated_comment: bool,
}

/// Lexer for the language.
///
/// The lexer pulls characters from a [`Cursor`] and emits classified
/// [`Token`]s one at a time. Lexical problems never stop it: malformed text
/// comes out as invalid tokens, and unterminated constructs are additionally
/// reported to the [`Handler`].
///
/// # Examples
///
/// ```
/// use lexc_lex::{Category, Lexer};
/// use lexc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("int x;", &handler);
///
/// let first = lexer.next_token().unwrap();
/// assert_eq!(first.category, Category::Keyword("DT"));
/// assert_eq!(lexer.count(), 2);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(super) handler: &'a Handler,

    /// Current scanning mode.
    pub(super) mode: Mode,

    /// Word characters seen since the last boundary.
    pending: String,

    /// Line of the first pending character.
    pending_line: u32,

    /// Set once the end of input has been handled.
    finished: bool,

    emitted: usize,
    invalid: usize,
    unterminated_comment: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            mode: Mode::Normal,
            pending: String::new(),
            pending_line: 1,
            finished: false,
            emitted: 0,
            invalid: 0,
            unterminated_comment: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Word characters accumulate until some other character ends the word;
    /// that character is then handled on the following call, after the word
    /// itself has been returned.
    ///
    /// # Returns
    /// The next token, or `None` once the input is exhausted. After the first
    /// `None` every later call also returns `None`.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        loop {
            match self.mode {
                Mode::Normal => {},
                Mode::LineComment => {
                    self.skip_line_comment();
                    continue;
                },
                Mode::BlockComment(opener) => {
                    self.skip_block_comment(opener);
                    continue;
                },
            }

            let Some(c) = self.cursor.peek() else {
                self.finished = true;
                return self.flush();
            };

            if is_word_char(c) {
                if self.pending.is_empty() {
                    self.pending_line = self.cursor.line();
                }
                self.pending.push(c);
                self.cursor.bump();
                continue;
            }

            if let Some(token) = self.flush() {
                return Some(token);
            }

            match c {
                c if is_whitespace(c) => {
                    self.cursor.bump();
                },
                '`' => return Some(self.lex_comment_opener()),
                '"' => return Some(self.lex_string()),
                '\'' => return Some(self.lex_char()),
                c if tables::starts_symbol(c) => return Some(self.lex_symbol()),
                c => {
                    let line = self.cursor.line();
                    self.cursor.bump();
                    return Some(self.make_token(c.to_string(), line));
                },
            }
        }
    }

    /// Drives the lexer to the end of input, handing every token to `sink`.
    ///
    /// # Returns
    /// Counters describing the scan.
    pub fn run<S>(mut self, sink: &mut S) -> ScanSummary
    where
        S: TokenSink + ?Sized,
    {
        debug!(bytes = self.cursor.source().len(), "starting scan");
        while let Some(token) = self.next_token() {
            sink.accept(token);
        }
        let summary = self.summary();
        debug!(
            tokens = summary.tokens,
            invalid = summary.invalid,
            lines = summary.lines,
            "scan finished"
        );
        summary
    }

    /// Returns the counters gathered so far.
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            tokens: self.emitted,
            invalid: self.invalid,
            lines: self.cursor.line(),
            unterminated_comment: self.unterminated_comment,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Emits the pending word, if there is one.
    fn flush(&mut self) -> Option<Token> {
        if self.pending.is_empty() {
            return None;
        }
        let lexeme = std::mem::take(&mut self.pending);
        Some(self.make_token(lexeme, self.pending_line))
    }

    /// Classifies a finished lexeme and records it.
    pub(super) fn make_token(&mut self, lexeme: String, line: u32) -> Token {
        let category = classify(&lexeme);
        let value = char_value(&lexeme);
        let token = Token {
            category,
            lexeme,
            line,
            value,
        };

        self.emitted += 1;
        if token.is_invalid() {
            self.invalid += 1;
        }
        trace!(category = %token.category, lexeme = %token.lexeme, line, "token");
        token
    }

    /// Span from `start` (with its line and column) to the cursor.
    pub(super) fn span_from(&self, start: usize, line: u32, column: u32) -> Span {
        Span::new(start, self.cursor.position(), line, column)
    }

    /// Reports a lexical error.
    ///
    /// # Arguments
    /// * `code` - Diagnostic code identifying the condition
    /// * `span` - Where the offending construct starts
    /// * `message` - The error message to display
    /// * `help` - How to fix it
    pub(super) fn report_error(
        &self,
        code: DiagnosticCode,
        span: Span,
        message: &str,
        help: &str,
    ) {
        debug!(code = %code, line = span.line, column = span.column, "{}", message);
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .help(help)
            .emit(self.handler);
    }

    pub(super) fn mark_unterminated_comment(&mut self) {
        self.unterminated_comment = true;
    }
}

/// Characters that separate tokens without producing one.
#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{b}' | '\u{c}')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
