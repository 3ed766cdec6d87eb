//! Error types for the monkey-lex crate.
//!
//! Scanning itself never fails: illegal input becomes [`TokenKind::Illegal`]
//! tokens. These errors surface only from the strict convenience API and from
//! configuration loading.
//!
//! [`TokenKind::Illegal`]: crate::TokenKind::Illegal

use std::path::PathBuf;

use monkey_util::Span;
use thiserror::Error;

/// Error returned by [`tokenize_strict`](crate::tokenize_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("illegal character {ch:?} at {span}")]
    IllegalCharacter {
        /// The offending character
        ch: char,
        /// Where it was found
        span: Span,
    },
}

/// Error type for loading a [`LexConfig`](crate::LexConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid TOML for this schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for strict scanning
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
