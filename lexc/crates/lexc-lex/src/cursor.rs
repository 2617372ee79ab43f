//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for tokens and diagnostics.

/// A cursor for traversing source code character by character.
///
/// Consumption is one-way: the only lookahead is [`Cursor::peek`], and a
/// consumed character is never pushed back.
///
/// # Example
///
/// ```
/// use lexc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.peek(), Some('i'));
/// assert_eq!(cursor.bump(), Some('i'));
/// assert_eq!(cursor.peek(), Some('n'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// Returns `None` at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(Cursor::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next()
    }

    /// Consumes and returns the next character.
    ///
    /// Updates line and column tracking: consuming `\n` moves to column 1 of
    /// the next line. Returns `None` (and does nothing) at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.bump();
    /// assert_eq!(cursor.line(), 1);
    /// cursor.bump();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.eat('='));
    /// assert!(!cursor.eat('='));
    /// assert_eq!(cursor.peek(), Some('>'));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("'a' x");
    /// cursor.bump();
    /// cursor.bump();
    /// cursor.bump();
    /// assert_eq!(cursor.slice_from(0), "'a'");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
