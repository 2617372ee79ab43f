//! Operator and punctuator lexing.
//!
//! Symbols are matched greedily over at most two characters: the first
//! character is consumed, the second only if the pair is itself a table
//! entry.

use crate::tables;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuator.
    ///
    /// Handles every entry of the operator and punctuator tables. A starting
    /// character that is not an entry on its own, such as a lone `&`, is
    /// returned alone and classifies as invalid.
    pub(super) fn lex_symbol(&mut self) -> Token {
        let start = self.cursor.position();
        let line = self.cursor.line();
        self.cursor.bump();

        if let Some(next) = self.cursor.peek() {
            let mut pair = self.cursor.slice_from(start).to_string();
            pair.push(next);
            if tables::is_symbol(&pair) {
                self.cursor.bump();
                return self.make_token(pair, line);
            }
        }

        let lexeme = self.cursor.slice_from(start).to_string();
        self.make_token(lexeme, line)
    }
}
