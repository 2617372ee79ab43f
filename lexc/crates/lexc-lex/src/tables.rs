//! Classification tables.
//!
//! Three fixed vocabularies map exact lexeme text to a category label:
//! keywords, operators and punctuators. The raw entry lists are public so
//! callers can enumerate them; lookups go through hash maps built once on
//! first use and never mutated afterwards.
//!
//! The vocabularies are disjoint. Keywords are alphabetic and the two symbol
//! tables share no key.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Reserved words and their labels.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("int", "DT"),
    ("char", "DT"),
    ("bool", "DT"),
    ("if", "if"),
    ("else", "else"),
    ("return", "return"),
    ("break", "break"),
    ("continue", "continue"),
    ("new", "new"),
    ("for", "for"),
    ("void", "void"),
    ("public", "Access Specifier"),
    ("private", "Access Specifier"),
    ("protected", "Access Specifier"),
    ("class", "class"),
    ("this", "this"),
    ("default", "default"),
    ("delete", "delete"),
    ("static", "static"),
    ("virtual", "virtual"),
    ("enum", "enum"),
    ("sizeof", "sizeof"),
    ("main", "main"),
];

/// Operators and their labels.
pub const OPERATORS: &[(&str, &str)] = &[
    ("+", "PM"),
    ("-", "PM"),
    ("*", "MDM"),
    ("/", "MDM"),
    ("%", "MDM"),
    ("&&", "LogAnd"),
    ("||", "LogOR"),
    ("!", "NOT"),
    ("==", "REL OP"),
    ("!=", "REL OP"),
    ("<=", "REL OP"),
    (">=", "REL OP"),
    ("<", "REL OP"),
    (">", "REL OP"),
    ("=", "="),
    ("*=", "*="),
    ("+=", "ASSIGNMENT OP"),
    ("-=", "ASSIGNMENT OP"),
    ("/=", "ASSIGNMENT OP"),
    ("++", "INC/DEC"),
    ("--", "INC/DEC"),
    ("?", "Ternary OP"),
];

/// Punctuators and their labels.
pub const PUNCTUATORS: &[(&str, &str)] = &[
    (";", ";"),
    ("(", "("),
    (")", ")"),
    ("[", "["),
    ("]", "]"),
    ("{", "{"),
    ("}", "}"),
    (":", ":"),
    (",", ","),
    ("::", "::"),
    ("~", "~"),
    (".", "DA"),
    ("->", "DA"),
];

lazy_static! {
    static ref KEYWORD_TABLE: FxHashMap<&'static str, &'static str> =
        KEYWORDS.iter().copied().collect();
    static ref OPERATOR_TABLE: FxHashMap<&'static str, &'static str> =
        OPERATORS.iter().copied().collect();
    static ref PUNCTUATOR_TABLE: FxHashMap<&'static str, &'static str> =
        PUNCTUATORS.iter().copied().collect();
}

/// Looks up the label of a keyword.
///
/// ```
/// assert_eq!(lexc_lex::tables::keyword("int"), Some("DT"));
/// assert_eq!(lexc_lex::tables::keyword("true"), None);
/// ```
#[inline]
pub fn keyword(lexeme: &str) -> Option<&'static str> {
    KEYWORD_TABLE.get(lexeme).copied()
}

/// Looks up the label of an operator.
#[inline]
pub fn operator(lexeme: &str) -> Option<&'static str> {
    OPERATOR_TABLE.get(lexeme).copied()
}

/// Looks up the label of a punctuator.
#[inline]
pub fn punctuator(lexeme: &str) -> Option<&'static str> {
    PUNCTUATOR_TABLE.get(lexeme).copied()
}

/// Returns true if `lexeme` is an operator or punctuator entry.
#[inline]
pub fn is_symbol(lexeme: &str) -> bool {
    OPERATOR_TABLE.contains_key(lexeme) || PUNCTUATOR_TABLE.contains_key(lexeme)
}

/// Returns true if some operator or punctuator entry begins with `c`.
///
/// This includes characters such as `&` that only appear as the first half
/// of a two-character entry.
pub fn starts_symbol(c: char) -> bool {
    OPERATORS
        .iter()
        .chain(PUNCTUATORS)
        .any(|(lexeme, _)| lexeme.starts_with(c))
}
