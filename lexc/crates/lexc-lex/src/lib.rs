//! lexc-lex - Lexical Analyzer
//!
//! This crate turns source text of a small C-like language into a stream of
//! classified tokens. Each token carries its category, the exact source text
//! it was made from, and the line it starts on.
//!
//! # Overview
//!
//! Scanning is a single forward pass with one character of lookahead. Runs of
//! letters, digits and underscores accumulate into a pending word; any other
//! character ends the word and is handled on its own: whitespace is dropped,
//! symbols are matched greedily over two characters, quotes start string and
//! character constants, and a backtick starts a comment. Every finished
//! lexeme goes through [`classify`].
//!
//! Nothing in the input makes scanning fail. Text that fits no category
//! comes out as [`Category::Invalid`], and unterminated constructs are also
//! reported to the [`Handler`](lexc_util::Handler) as errors.
//!
//! # Example Usage
//!
//! ```
//! use lexc_lex::{tokenize, Category};
//!
//! let tokens = tokenize("int x;\nx = 'a';");
//!
//! assert_eq!(tokens[0].category, Category::Keyword("DT"));
//! assert_eq!(tokens[3].line, 2);
//! assert_eq!(tokens[5].value, Some('a'));
//! assert_eq!(tokens[0].to_string(), "(DT , int, line 1)");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and category definitions
//! - [`tables`] - Keyword, operator and punctuator tables
//! - [`classify`](mod@classify) - Lexeme classification
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`sink`] - Token consumers
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `int`, `char` and `bool` are data types (`DT`); `public`, `private` and
//! `protected` are access specifiers. The remaining reserved words are their
//! own category: `if`, `else`, `return`, `break`, `continue`, `new`, `for`,
//! `void`, `class`, `this`, `default`, `delete`, `static`, `virtual`, `enum`,
//! `sizeof`, `main`.
//!
//! ## Constants
//!
//! - **Integer**: `0`, `42`, `007`
//! - **String**: `"hello"` (no escapes)
//! - **Character**: `'a'`, `'\n'`
//!
//! ## Operators and Punctuators
//!
//! - **Arithmetic**: `+`, `-` (`PM`), `*`, `/`, `%` (`MDM`)
//! - **Logical**: `&&`, `||`, `!`
//! - **Relational**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Assignment**: `=`, `*=`, `+=`, `-=`, `/=`
//! - **Other**: `++`, `--`, `?`
//! - **Punctuation**: `;`, `,`, `:`, `::`, `~`, `()`, `[]`, `{}`
//! - **Access**: `.`, `->` (`DA`)
//!
//! ## Comments
//!
//! A doubled backtick starts a line comment and `` `@ `` starts a block
//! comment closed by `` @` ``. The opener is reported as a comment token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod sink;
pub mod tables;
pub mod token;

mod edge_cases;

use std::io::Read;

use lexc_util::Handler;

// Re-export main types for convenience
pub use classify::{classify, decode_escape};
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{Lexer, ScanSummary};
pub use sink::{TokenSink, TokenWriter};
pub use token::{Category, Token};

/// Tokenizes `source`, discarding diagnostics.
pub fn tokenize(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    Lexer::new(source, &handler).collect()
}

/// Reads all of `reader` and scans it into `sink`.
///
/// The whole source is read before the first token is produced, so a read
/// failure never leaves partial output behind. Invalid UTF-8 is replaced
/// with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns [`LexError::Io`] if reading fails.
///
/// # Examples
///
/// ```
/// use lexc_lex::{scan_reader, Token};
/// use lexc_util::Handler;
///
/// let handler = Handler::new();
/// let mut tokens: Vec<Token> = Vec::new();
/// let summary = scan_reader(&b"a = 1;"[..], &handler, &mut tokens).unwrap();
/// assert_eq!(summary.tokens, 4);
/// ```
pub fn scan_reader<R, S>(
    mut reader: R,
    handler: &Handler,
    sink: &mut S,
) -> error::Result<ScanSummary>
where
    R: Read,
    S: TokenSink + ?Sized,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(Lexer::new(&source, handler).run(sink))
}
