//! String and character constant lexing.
//!
//! String constants are taken verbatim: a backslash has no special meaning
//! and the first `"` after the opener closes the constant. Character
//! constants honour a backslash by taking the next character unconditionally,
//! so `'\''` is a single constant.

use lexc_util::DiagnosticCode;

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string constant starting at `"`.
    ///
    /// # Returns
    /// The raw text including both quotes. At end of input the lexeme lacks
    /// its closing quote and `E0101` is reported.
    pub(super) fn lex_string(&mut self) -> Token {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.bump();

        let mut closed = false;
        while let Some(c) = self.cursor.bump() {
            if c == '"' {
                closed = true;
                break;
            }
        }

        if !closed {
            self.report_error(
                DiagnosticCode::E_UNTERMINATED_STRING,
                self.span_from(start, line, column),
                "unterminated string constant",
                "close the string with `\"`",
            );
        }

        let lexeme = self.cursor.slice_from(start).to_string();
        self.make_token(lexeme, line)
    }

    /// Lexes a character constant starting at `'`.
    ///
    /// # Returns
    /// The raw text including both quotes. Whether it is a valid constant is
    /// left to classification; at end of input `E0102` is reported.
    pub(super) fn lex_char(&mut self) -> Token {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.bump();

        let mut closed = false;
        while let Some(c) = self.cursor.bump() {
            match c {
                '\'' => {
                    closed = true;
                    break;
                },
                '\\' => {
                    if self.cursor.bump().is_none() {
                        break;
                    }
                },
                _ => {},
            }
        }

        if !closed {
            self.report_error(
                DiagnosticCode::E_UNTERMINATED_CHAR,
                self.span_from(start, line, column),
                "unterminated character constant",
                "close the constant with `'`",
            );
        }

        let lexeme = self.cursor.slice_from(start).to_string();
        self.make_token(lexeme, line)
    }
}
