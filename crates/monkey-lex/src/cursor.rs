//! Character cursor for traversing source code.
//!
//! The cursor keeps the classic scanner triple: `position` (the character
//! under the cursor), `read_position` (where the next character starts) and
//! the decoded current character. Past the end the current character is the
//! sentinel `'\0'` and `read_position` sits one past `source.len()`.

/// Sentinel returned for every read past the end of input.
pub const EOF_CHAR: char = '\0';

/// A cursor over a source string with one character of lookahead.
///
/// # Example
///
/// ```
/// use monkey_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("==");
/// assert_eq!(cursor.current_char(), '=');
/// assert_eq!(cursor.peek_char(), '=');
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.is_at_end());
/// assert_eq!(cursor.current_char(), '\0');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of `ch`.
    position: usize,

    /// Byte offset of the character after `ch`.
    read_position: usize,

    /// Character under the cursor, or `EOF_CHAR`.
    ch: char,

    /// Line of `ch` (1-based).
    line: u32,

    /// Column of `ch` (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
            line: 1,
            column: 1,
        };
        cursor.load();
        cursor
    }

    /// Moves `position` to `read_position` and decodes the character there.
    fn load(&mut self) {
        self.position = self.read_position;
        match self.source.get(self.read_position..).and_then(|s| s.chars().next()) {
            Some(c) => {
                self.ch = c;
                self.read_position += c.len_utf8();
            },
            None => {
                self.ch = EOF_CHAR;
                self.position = self.source.len();
                self.read_position = self.source.len() + 1;
            },
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.ch
    }

    /// Returns the character after the current one without moving.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!");
    /// assert_eq!(cursor.peek_char(), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        self.source
            .get(self.read_position..)
            .and_then(|s| s.chars().next())
            .unwrap_or(EOF_CHAR)
    }

    /// Advances to the next character.
    ///
    /// Updates line and column tracking. Does nothing once at the end, so the
    /// cursor never moves past `source.len()`.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        if self.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.load();
    }

    /// Returns true once every character has been consumed.
    ///
    /// An embedded NUL character is not the end; only running out of text is.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.read_position > self.source.len()
    }

    /// Skips spaces, tabs, newlines, and carriage returns.
    ///
    /// Other Unicode whitespace is left in place and scans as illegal.
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\nlet");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'l');
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.advance();
        }
    }

    /// Returns the source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset of the next character.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert_eq!(cursor.peek_char(), EOF_CHAR);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.read_position(), 4);
    }

    #[test]
    fn test_read_position_tracks_position() {
        let mut cursor = Cursor::new("a=b");
        while !cursor.is_at_end() {
            assert_eq!(cursor.read_position(), cursor.position() + 1);
            cursor.advance();
        }
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.current_char(), 'α');
        assert_eq!(cursor.read_position(), 2);
        assert_eq!(cursor.peek_char(), 'β');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("!=");
        assert_eq!(cursor.peek_char(), '=');
        assert_eq!(cursor.peek_char(), '=');
        assert_eq!(cursor.current_char(), '!');
    }

    #[test]
    fn test_embedded_nul_is_not_end() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_skip_whitespace_only() {
        let mut cursor = Cursor::new(" \t\n\r ");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_whitespace_leaves_unicode_space() {
        let mut cursor = Cursor::new(" \u{00A0}x");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), '\u{00A0}');
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("let x");
        let start = cursor.position();
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(start), "let");
        for _ in 0..10 {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "let x");
    }
}
