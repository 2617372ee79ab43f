//! Comment lexing.
//!
//! Both comment forms open with a backtick. A doubled backtick runs to the
//! end of the line; `` `@ `` runs until `` @` ``. The opener itself is
//! returned as a comment token and the body is skipped on the following call.

use lexc_util::{DiagnosticCode, Span};

use super::core::Mode;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a comment opener starting at a backtick.
    ///
    /// A backtick followed by anything other than a backtick or `@` is
    /// returned alone; the character after it is left for the next call.
    pub(super) fn lex_comment_opener(&mut self) -> Token {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.bump();

        if self.cursor.eat('`') {
            self.mode = Mode::LineComment;
        } else if self.cursor.eat('@') {
            self.mode = Mode::BlockComment(self.span_from(start, line, column));
        }

        let lexeme = self.cursor.slice_from(start).to_string();
        self.make_token(lexeme, line)
    }

    /// Skips the body of a line comment, including the closing newline.
    pub(super) fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.bump() {
            if c == '\n' {
                break;
            }
        }
        self.mode = Mode::Normal;
    }

    /// Skips the body of a block comment, including the `` @` `` closer.
    ///
    /// Reaching the end of input first reports `E0103` at the opener.
    pub(super) fn skip_block_comment(&mut self, opener: Span) {
        self.mode = Mode::Normal;
        loop {
            match self.cursor.bump() {
                Some('@') => {
                    if self.cursor.eat('`') {
                        return;
                    }
                },
                Some(_) => {},
                None => break,
            }
        }

        self.mark_unterminated_comment();
        self.report_error(
            DiagnosticCode::E_UNTERMINATED_COMMENT,
            opener,
            "unterminated block comment",
            "close the comment with `@` followed by a backtick",
        );
    }
}
