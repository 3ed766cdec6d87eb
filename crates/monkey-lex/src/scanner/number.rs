//! Integer literal scanning.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a decimal integer literal.
    ///
    /// Only ASCII digits are consumed. There is no sign, fraction, exponent,
    /// or radix prefix; the literal text is left unparsed.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        TokenKind::Int
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
    fn test_multi_digit_is_one_token() {
        assert_eq!(scan("10"), vec![(TokenKind::Int, "10")]);
        assert_eq!(scan("007"), vec![(TokenKind::Int, "007")]);
    }

    #[test]
    fn test_huge_literal_is_not_parsed() {
        let digits = "9".repeat(64);
        assert_eq!(scan(&digits), vec![(TokenKind::Int, digits.as_str())]);
    }

    #[test]
    fn test_no_fraction() {
        assert_eq!(
            scan("3.14"),
            vec![
                (TokenKind::Int, "3"),
                (TokenKind::Illegal, "."),
                (TokenKind::Int, "14"),
            ]
        );
    }

    #[test]
    fn test_no_sign() {
        assert_eq!(scan("-5"), vec![(TokenKind::Minus, "-"), (TokenKind::Int, "5")]);
    }

    #[test]
    fn test_letters_end_number() {
        assert_eq!(
            scan("0xFF"),
            vec![(TokenKind::Int, "0"), (TokenKind::Ident, "xFF")]
        );
    }

    #[test]
    fn test_non_ascii_digit_is_illegal() {
        assert_eq!(
            scan("1\u{0661}"),
            vec![(TokenKind::Int, "1"), (TokenKind::Illegal, "\u{0661}")]
        );
    }
}
