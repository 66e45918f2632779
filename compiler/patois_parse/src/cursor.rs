//! Token cursor for navigating the token stream.
//!
//! Low-level token access, lookahead, and consumption. The stream the
//! lexer hands over always ends in `Eof`; the cursor never advances past
//! it, so `current()` is total.

use crate::error::{found_label, ParseError};
use patois_ir::{Token, TokenKind};

pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// True when the stream has no tokens at all (a caller bug the parser
    /// degrades into an empty program rather than panicking over).
    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the current token.
    ///
    /// Invariant: the last token is `Eof` and the cursor never moves past
    /// it, so the index stays in bounds.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Check if the current token matches `kind`.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Check if at end of the token stream.
    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume and return the current token. At `Eof` the cursor stays
    /// put and keeps returning the `Eof` token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with expected-vs-found.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Build an expected-vs-found error at the current token.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            expected,
            found: found_label(token),
            span: token.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patois_ir::Span;

    fn stream(kinds: &[TokenKind]) -> Vec<Token> {
        kinds.iter().map(|&kind| Token::dummy(kind)).collect()
    }

    #[test]
    fn advance_stops_at_eof() {
        let tokens = stream(&[TokenKind::Int, TokenKind::Eof]);
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance().kind, TokenKind::Int);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert!(cursor.at_end());
    }

    #[test]
    fn expect_reports_expected_vs_found() {
        let tokens = vec![Token::new(TokenKind::Ident, "x", Span::new(0, 1))];
        let mut cursor = Cursor::new(&tokens);
        let err = cursor.expect(TokenKind::Semicolon);
        assert_eq!(
            err,
            Err(ParseError::UnexpectedToken {
                expected: "`;`",
                found: "identifier `x`".to_owned(),
                span: Span::new(0, 1),
            })
        );
    }
}
