//! Token sinks.
//!
//! The scan loop hands every token to a [`TokenSink`] the moment its
//! boundary is recognized. Collecting into a `Vec`, calling a closure and
//! writing rendered lines to an [`io::Write`] are provided here.

use std::io::{self, Write};

use crate::token::Token;

/// Receives tokens in source order.
pub trait TokenSink {
    /// Accepts the next token.
    fn accept(&mut self, token: Token);
}

impl TokenSink for Vec<Token> {
    fn accept(&mut self, token: Token) {
        self.push(token);
    }
}

impl<F> TokenSink for F
where
    F: FnMut(Token),
{
    fn accept(&mut self, token: Token) {
        self(token)
    }
}

/// Writes each token as one `(<category> , <lexeme>, line <line>)` line.
///
/// Writing stops at the first I/O error, which is kept and returned by
/// [`TokenWriter::finish`].
///
/// # Examples
///
/// ```
/// use lexc_lex::{Lexer, TokenWriter};
/// use lexc_util::Handler;
///
/// let handler = Handler::new();
/// let mut writer = TokenWriter::new(Vec::new());
/// Lexer::new("x = 1;", &handler).run(&mut writer);
///
/// let out = String::from_utf8(writer.finish().unwrap()).unwrap();
/// assert_eq!(out.lines().next(), Some("(identifier , x, line 1)"));
/// ```
pub struct TokenWriter<W: Write> {
    out: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> TokenWriter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    /// Returns the number of token lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes a raw line, such as a file header, between token streams.
    pub fn write_line(&mut self, line: &str) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.out, "{}", line) {
                self.error = Some(err);
            }
        }
    }

    /// Flushes the writer and returns it, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TokenSink for TokenWriter<W> {
    fn accept(&mut self, token: Token) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.out, "{}", token) {
            Ok(()) => self.written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}
