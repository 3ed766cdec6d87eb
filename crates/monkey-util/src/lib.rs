//! monkey-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Monkey toolchain:
//!
//! - [`span`] - Source locations attached to tokens and diagnostics
//! - [`diagnostic`] - Error/warning values and the collecting [`Handler`]
//!
//! The hash map used across the workspace is re-exported from `rustc-hash` so
//! every crate agrees on the hasher.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;

pub use rustc_hash::FxHashMap;
