//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the human-readable line and column of
//! its first character.
//!
//! # Examples
//!
//! ```
//! use lexc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

/// Source location span
///
/// # Examples
///
/// ```
/// use lexc_util::span::Span;
///
/// let span = Span::new(4, 9, 2, 1);
/// assert_eq!(span.line, 2);
/// assert_eq!(span.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based, 0 for the dummy span)
    pub line: u32,
    /// Column number (1-based, 0 for the dummy span)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics without a location
    ///
    /// # Examples
    ///
    /// ```
    /// use lexc_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_dummy());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span carries no location at all
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
