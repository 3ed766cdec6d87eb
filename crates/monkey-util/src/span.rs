//! Source location tracking.
//!
//! A [`Span`] records the byte range of a lexeme together with the 1-based
//! line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use monkey_util::span::Span;
//!
//! let span = Span::new(4, 8, 1, 5);
//! assert_eq!(span.end - span.start, 4);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// Byte offsets index into the scanned `&str`; `line` and `column` are
/// counted in characters, both starting at 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

static_assertions::assert_impl_all!(Span: Send, Sync, Copy);

impl Span {
    /// Dummy span for diagnostics that have no source location
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset.
    ///
    /// ```
    /// use monkey_util::span::Span;
    ///
    /// let span = Span::point(11, 1, 12);
    /// assert_eq!(span.start, span.end);
    /// assert_eq!(span.start, 11);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
