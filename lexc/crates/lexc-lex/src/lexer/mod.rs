//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, scan loop and dispatch
//! - `comment` - Comment openers and comment bodies
//! - `literal` - String and character constants
//! - `operator` - Operators and punctuators

mod comment;
mod core;
mod literal;
mod operator;

pub use self::core::{Lexer, ScanSummary};
