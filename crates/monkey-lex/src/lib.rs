//! monkey-lex - Lexical Scanner for the Monkey Programming Language
//!
//! This crate turns Monkey source text into a stream of classified tokens
//! for a parser to pull one at a time.
//!
//! # Example Usage
//!
//! ```
//! use monkey_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//!
//! let ident = scanner.next_token();
//! assert_eq!(ident.kind, TokenKind::Ident);
//! assert_eq!(ident.literal, "five");
//!
//! // The remaining tokens, up to but excluding EOF
//! let rest: Vec<_> = scanner.map(|t| t.kind).collect();
//! assert_eq!(rest, [TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the token value, and the keyword table
//! - [`cursor`] - Character cursor with one character of lookahead
//! - [`scanner`] - The scanner itself
//! - [`config`] - Diagnostic reporting options
//! - [`error`] - Error types for strict scanning and configuration
//!
//! # Token Categories
//!
//! - **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//! - **Identifiers**: `[a-zA-Z_]+` (digits are not part of identifiers)
//! - **Integers**: `[0-9]+`, kept as text
//! - **Operators**: `=`, `==`, `!`, `!=`, `+`, `-`, `*`, `/`, `<`, `>`
//! - **Delimiters**: `,`, `;`, `(`, `)`, `{`, `}`
//! - **Special**: `EOF` (repeatable), `ILLEGAL` (one per unrecognized character)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

pub use config::LexConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError, LexResult};
pub use scanner::Scanner;
pub use token::{keyword_from_ident, lookup_ident, Token, TokenKind};

/// Scans `source` completely.
///
/// The returned vector always ends with exactly one EOF token. Illegal
/// characters are kept in the stream as [`TokenKind::Illegal`] tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }
    tokens
}

/// Scans `source` completely, failing on the first illegal character.
///
/// ```
/// use monkey_lex::{tokenize_strict, LexError};
///
/// let err = tokenize_strict("let x = @;").unwrap_err();
/// assert!(matches!(err, LexError::IllegalCharacter { ch: '@', .. }));
/// ```
pub fn tokenize_strict(source: &str) -> LexResult<Vec<Token<'_>>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        match token.kind {
            TokenKind::Illegal => {
                let ch = token.literal.chars().next().unwrap_or(cursor::EOF_CHAR);
                return Err(LexError::IllegalCharacter {
                    ch,
                    span: token.span,
                });
            },
            TokenKind::Eof => {
                tokens.push(token);
                return Ok(tokens);
            },
            _ => tokens.push(token),
        }
    }
}
