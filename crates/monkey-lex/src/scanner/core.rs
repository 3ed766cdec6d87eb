//! Core scanner implementation.

use monkey_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::config::LexConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for Monkey source text.
///
/// Produces one token per [`next_token`](Scanner::next_token) call. Illegal
/// characters come back as [`TokenKind::Illegal`] tokens and, when a
/// [`Handler`] is attached, are also reported as diagnostics.
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for illegal-character diagnostics, if any.
    handler: Option<&'a Handler>,

    /// Reporting options.
    config: LexConfig,

    /// Diagnostics emitted so far by this scanner.
    reported: usize,

    /// Set once the limit warning has been emitted.
    suppressed: bool,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner that reports nothing beyond its tokens.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexConfig::default(), None)
    }

    /// Creates a scanner that reports illegal characters into `handler`.
    pub fn with_handler(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_config(source, LexConfig::default(), Some(handler))
    }

    /// Creates a scanner with explicit reporting options.
    pub fn with_config(source: &'a str, config: LexConfig, handler: Option<&'a Handler>) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            config,
            reported: 0,
            suppressed: false,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the current character. Once the
    /// input is exhausted every call returns a [`TokenKind::Eof`] token with
    /// an empty literal.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            let span = Span::point(
                self.token_start,
                self.token_start_line,
                self.token_start_column,
            );
            return self.traced(Token::new(TokenKind::Eof, "", span));
        }

        let kind = match self.cursor.current_char() {
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ',' => self.single(TokenKind::Comma),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '/' => self.single(TokenKind::Slash),
            '*' => self.single(TokenKind::Asterisk),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            c if is_letter(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.report_illegal(c);
                TokenKind::Illegal
            },
        };

        self.make_token(kind)
    }

    /// Consumes one character and classifies it as `kind`.
    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Builds a token from `token_start` up to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        self.traced(Token::new(kind, self.cursor.slice_from(self.token_start), self.span()))
    }

    fn traced(&self, token: Token<'a>) -> Token<'a> {
        tracing::trace!(
            kind = %token.kind,
            literal = token.literal,
            line = token.span.line,
            column = token.span.column,
            "scanned token"
        );
        token
    }

    /// Span of the lexeme scanned so far.
    fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Reports an illegal character at the current token position.
    fn report_illegal(&mut self, c: char) {
        let span = self.span();
        tracing::debug!(ch = ?c, %span, "illegal character");

        let Some(handler) = self.handler else {
            return;
        };
        if !self.config.allows_report(self.reported) {
            if self.config.report_illegal && !self.suppressed {
                self.suppressed = true;
                let message = "too many illegal characters, further reports suppressed";
                DiagnosticBuilder::warning(message)
                    .span(span)
                    .note(format!(
                        "limit is {} diagnostics, set by `max_diagnostics`",
                        self.config.max_diagnostics
                    ))
                    .emit(handler);
            }
            return;
        }
        self.reported += 1;
        DiagnosticBuilder::error(format!("illegal character {:?}", c))
            .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
            .span(span)
            .help("remove the character or replace it with valid Monkey syntax")
            .emit(handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

/// Letters and underscore start and continue identifiers; digits do neither.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
