//! Lexeme classification.
//!
//! [`classify`] assigns exactly one [`Category`] to any completed lexeme by
//! trying a fixed list of shapes in priority order. The first match wins,
//! which is what keeps `==` from being read as two `=` and `main` from being
//! read as an identifier.

use crate::tables;
use crate::token::Category;

/// Escaped characters accepted in a four-character constant such as `'\n'`.
pub const ESCAPES: &[char] = &['n', 't', 'r', 'b', 'f', 'a', 'v', '?', '\'', '"', '\\', '0'];

/// Classifies a lexeme.
///
/// Shapes are tried in this order:
///
/// 1. operator table
/// 2. punctuator table
/// 3. keyword table
/// 4. one or more ASCII digits
/// 5. string constant
/// 6. character constant
/// 7. identifier
/// 8. comment opener
///
/// Anything left over is [`Category::Invalid`].
///
/// # Examples
///
/// ```
/// use lexc_lex::{classify, Category};
///
/// assert_eq!(classify("=="), Category::Operator("REL OP"));
/// assert_eq!(classify("main"), Category::Keyword("main"));
/// assert_eq!(classify("007"), Category::IntConst);
/// assert_eq!(classify("'ab'"), Category::Invalid);
/// ```
pub fn classify(lexeme: &str) -> Category {
    if let Some(label) = tables::operator(lexeme) {
        Category::Operator(label)
    } else if let Some(label) = tables::punctuator(lexeme) {
        Category::Punctuator(label)
    } else if let Some(label) = tables::keyword(lexeme) {
        Category::Keyword(label)
    } else if is_int_const(lexeme) {
        Category::IntConst
    } else if is_str_const(lexeme) {
        Category::StrConst
    } else if is_char_const(lexeme) {
        Category::CharConst
    } else if is_identifier(lexeme) {
        Category::Identifier
    } else if is_comment_opener(lexeme) {
        Category::Comment
    } else {
        Category::Invalid
    }
}

/// Returns true for a non-empty run of ASCII digits.
pub fn is_int_const(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true for text delimited by double quotes at both ends.
pub fn is_str_const(lexeme: &str) -> bool {
    lexeme.len() >= 2 && lexeme.starts_with('"') && lexeme.ends_with('"')
}

/// Returns true for `'c'` with a non-backslash `c`, or `'\e'` with `e` in
/// [`ESCAPES`].
pub fn is_char_const(lexeme: &str) -> bool {
    let chars: Vec<char> = lexeme.chars().collect();
    match chars.as_slice() {
        ['\'', c, '\''] => *c != '\\',
        ['\'', '\\', e, '\''] => ESCAPES.contains(e),
        _ => false,
    }
}

/// Returns true for a name: ASCII alphanumerics and `_`, not starting with a
/// digit.
pub fn is_identifier(lexeme: &str) -> bool {
    let mut bytes = lexeme.bytes();
    match bytes.next() {
        Some(first) if !first.is_ascii_digit() && is_ident_byte(first) => {
            bytes.all(is_ident_byte)
        },
        _ => false,
    }
}

/// Returns true for either comment opener.
pub fn is_comment_opener(lexeme: &str) -> bool {
    lexeme == "``" || lexeme == "`@"
}

/// Returns true if `c` can be part of a pending word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Interprets the character after a backslash in a character constant.
///
/// Unknown escapes stand for themselves.
///
/// ```
/// use lexc_lex::decode_escape;
///
/// assert_eq!(decode_escape('n'), '\n');
/// assert_eq!(decode_escape('a'), '\u{7}');
/// assert_eq!(decode_escape('q'), 'q');
/// ```
pub fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'v' => '\u{b}',
        'f' => '\u{c}',
        'a' => '\u{7}',
        'b' => '\u{8}',
        '0' => '\0',
        other => other,
    }
}

/// Returns the character a valid character constant denotes.
///
/// Returns `None` when `lexeme` is not a valid character constant.
pub fn char_value(lexeme: &str) -> Option<char> {
    if !is_char_const(lexeme) {
        return None;
    }
    let mut inner = lexeme.chars().skip(1);
    match inner.next()? {
        '\\' => inner.next().map(decode_escape),
        c => Some(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{KEYWORDS, OPERATORS, PUNCTUATORS};

    #[test]
    fn test_every_table_entry_classifies_to_its_label() {
        for (lexeme, label) in OPERATORS {
            assert_eq!(classify(lexeme), Category::Operator(label), "{lexeme}");
        }
        for (lexeme, label) in PUNCTUATORS {
            assert_eq!(classify(lexeme), Category::Punctuator(label), "{lexeme}");
        }
        for (lexeme, label) in KEYWORDS {
            assert_eq!(classify(lexeme), Category::Keyword(label), "{lexeme}");
        }
    }

    #[test]
    fn test_int_const() {
        assert_eq!(classify("0"), Category::IntConst);
        assert_eq!(classify("123456789"), Category::IntConst);
        assert_eq!(classify("12a"), Category::Invalid);
        assert_eq!(classify("-1"), Category::Invalid);
        assert!(!is_int_const(""));
    }

    #[test]
    fn test_str_const() {
        assert_eq!(classify("\"\""), Category::StrConst);
        assert_eq!(classify("\"a b\\n\""), Category::StrConst);
        assert_eq!(classify("\""), Category::Invalid);
        assert_eq!(classify("\"open"), Category::Invalid);
    }

    #[test]
    fn test_char_const() {
        assert_eq!(classify("'a'"), Category::CharConst);
        assert_eq!(classify("' '"), Category::CharConst);
        for e in ESCAPES {
            let lexeme = format!("'\\{e}'");
            assert_eq!(classify(&lexeme), Category::CharConst, "{lexeme}");
        }
    }

    #[test]
    fn test_char_const_rejects_bad_shapes() {
        assert_eq!(classify("'ab'"), Category::Invalid);
        assert_eq!(classify("'\\'"), Category::Invalid);
        assert_eq!(classify("'\\q'"), Category::Invalid);
        assert_eq!(classify("''"), Category::Invalid);
        assert_eq!(classify("'a"), Category::Invalid);
        assert_eq!(classify("'abc'"), Category::Invalid);
    }

    #[test]
    fn test_identifier() {
        assert_eq!(classify("x"), Category::Identifier);
        assert_eq!(classify("_tmp1"), Category::Identifier);
        assert_eq!(classify("true"), Category::Identifier);
        assert_eq!(classify("Main"), Category::Identifier);
        assert_eq!(classify("1x"), Category::Invalid);
        assert_eq!(classify("héllo"), Category::Invalid);
    }

    #[test]
    fn test_keywords_win_over_identifiers() {
        assert_eq!(classify("main"), Category::Keyword("main"));
        assert_eq!(classify("if"), Category::Keyword("if"));
        assert_eq!(classify("class"), Category::Keyword("class"));
    }

    #[test]
    fn test_comment_openers() {
        assert_eq!(classify("``"), Category::Comment);
        assert_eq!(classify("`@"), Category::Comment);
        assert_eq!(classify("`"), Category::Invalid);
        assert_eq!(classify("@`"), Category::Invalid);
    }

    #[test]
    fn test_invalid_leftovers() {
        for lexeme in ["", "&", "|", "#", "$", "@", "=>", "\u{e9}"] {
            assert_eq!(classify(lexeme), Category::Invalid, "{lexeme:?}");
        }
    }

    #[test]
    fn test_decode_escape_table() {
        assert_eq!(decode_escape('t'), '\t');
        assert_eq!(decode_escape('r'), '\r');
        assert_eq!(decode_escape('v'), '\u{b}');
        assert_eq!(decode_escape('f'), '\u{c}');
        assert_eq!(decode_escape('b'), '\u{8}');
        assert_eq!(decode_escape('0'), '\0');
        assert_eq!(decode_escape('?'), '?');
        assert_eq!(decode_escape('"'), '"');
        assert_eq!(decode_escape('\''), '\'');
        assert_eq!(decode_escape('\\'), '\\');
    }

    #[test]
    fn test_char_value() {
        assert_eq!(char_value("'x'"), Some('x'));
        assert_eq!(char_value("'\\n'"), Some('\n'));
        assert_eq!(char_value("'\\''"), Some('\''));
        assert_eq!(char_value("'ab'"), None);
        assert_eq!(char_value("x"), None);
    }
}
