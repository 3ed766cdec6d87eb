//! Scanner module.
//!
//! - `core` - Scanner struct, dispatch, and diagnostics
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Integer literal scanning
//! - `operator` - One- and two-character operators

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Scanner;
