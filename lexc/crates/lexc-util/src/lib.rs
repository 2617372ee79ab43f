//! lexc-util - Shared foundation types for the lexc toolchain
//!
//! This crate holds the pieces every phase needs but none of them owns:
//!
//! - [`span`] - source locations (byte range plus line/column)
//! - [`diagnostic`] - levels, codes, diagnostics, the fluent builder and the
//!   collecting [`Handler`]
//! - [`error`] - error types for the utilities themselves
//!
//! Lexical problems are never fatal in lexc. Phases report them through a
//! [`Handler`] and keep going; the caller decides afterwards whether the
//! collected diagnostics should fail the run.
//!
//! ```
//! use lexc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string constant")
//!     .code(DiagnosticCode::E_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SnippetError, SnippetResult};
pub use span::Span;
