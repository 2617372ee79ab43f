//! Token definitions.
//!
//! A [`Token`] is the record handed downstream: its [`Category`], the raw
//! lexeme, and the line the lexeme starts on.

use std::fmt;

/// The classification of a lexeme.
///
/// Table-driven categories carry the label from their table, so two
/// operators such as `<` and `==` compare equal as `Operator("REL OP")`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// An operator-table entry.
    Operator(&'static str),
    /// A punctuator-table entry.
    Punctuator(&'static str),
    /// A keyword-table entry.
    Keyword(&'static str),
    /// Unsigned decimal digits.
    IntConst,
    /// A double-quoted string constant.
    StrConst,
    /// A single-quoted character constant.
    CharConst,
    /// A name.
    Identifier,
    /// A comment opener.
    Comment,
    /// Anything that matches no other shape.
    Invalid,
}

impl Category {
    /// Returns the textual label used when rendering tokens.
    ///
    /// ```
    /// use lexc_lex::Category;
    ///
    /// assert_eq!(Category::Keyword("DT").label(), "DT");
    /// assert_eq!(Category::IntConst.label(), "Int Const");
    /// assert_eq!(Category::Invalid.label(), "Invalid token");
    /// ```
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Operator(label) | Category::Punctuator(label) | Category::Keyword(label) => {
                label
            },
            Category::IntConst => "Int Const",
            Category::StrConst => "Str Const",
            Category::CharConst => "Char Const",
            Category::Identifier => "identifier",
            Category::Comment => "comment",
            Category::Invalid => "Invalid token",
        }
    }

    /// Returns true for [`Category::Invalid`].
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Category::Invalid)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token's category.
    pub category: Category,
    /// The source text of the token.
    pub lexeme: String,
    /// Line the lexeme starts on (1-based).
    pub line: u32,
    /// The decoded character of a valid character constant.
    pub value: Option<char>,
}

impl Token {
    /// Creates a token without a decoded value.
    pub fn new(category: Category, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
            line,
            value: None,
        }
    }

    /// Attaches the decoded character of a character constant.
    pub fn with_value(mut self, value: char) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns true if the token classified as invalid.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.category.is_invalid()
    }
}

impl fmt::Display for Token {
    /// Renders `(<category> , <lexeme>, line <line>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {}, line {})", self.category, self.lexeme, self.line)
    }
}
