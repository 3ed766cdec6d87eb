//! Operator lexing.
//!
//! `=` and `!` are the only characters that consult lookahead; every other
//! operator is a single character.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.lex_with_equals(TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.lex_with_equals(TokenKind::NotEq, TokenKind::Bang)
    }

    /// Consumes the current character plus a directly following `=` if the
    /// lookahead shows one. Whitespace is never skipped in between.
    fn lex_with_equals(&mut self, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.peek_char() == '=' {
            self.cursor.advance();
            self.cursor.advance();
            double
        } else {
            self.cursor.advance();
            single
        }
    }
}
