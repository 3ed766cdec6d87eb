//! Identifier and keyword scanning.

use super::core::is_letter;
use crate::token::{lookup_ident, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes a run of ASCII letters and underscores, then resolves the
    /// text against the keyword table. Digits end the run, so `x1` scans as
    /// `IDENT("x")` followed by `INT("1")`.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        while is_letter(self.cursor.current_char()) {
            self.cursor.advance();
        }

        lookup_ident(self.cursor.slice_from(self.token_start))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Scanner;

    fn scan(source: &str) -> Vec<(TokenKind, &str)> {
        Scanner::new(source).map(|t| (t.kind, t.literal)).collect()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(scan("foo"), vec![(TokenKind::Ident, "foo")]);
    }

    #[test]
    fn test_identifier_with_underscores() {
        assert_eq!(scan("_foo_bar_"), vec![(TokenKind::Ident, "_foo_bar_")]);
        assert_eq!(scan("_"), vec![(TokenKind::Ident, "_")]);
    }

    #[test]
    fn test_digits_end_identifier() {
        assert_eq!(
            scan("x1y"),
            vec![
                (TokenKind::Ident, "x"),
                (TokenKind::Int, "1"),
                (TokenKind::Ident, "y"),
            ]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            scan("fn let true false if else return"),
            vec![
                (TokenKind::Function, "fn"),
                (TokenKind::Let, "let"),
                (TokenKind::True, "true"),
                (TokenKind::False, "false"),
                (TokenKind::If, "if"),
                (TokenKind::Else, "else"),
                (TokenKind::Return, "return"),
            ]
        );
    }

    #[test]
    fn test_keyword_glued_to_ident() {
        assert_eq!(scan("letx"), vec![(TokenKind::Ident, "letx")]);
        assert_eq!(scan("let_"), vec![(TokenKind::Ident, "let_")]);
    }

    #[test]
    fn test_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = scan(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1.len(), 10_000);
    }
}
