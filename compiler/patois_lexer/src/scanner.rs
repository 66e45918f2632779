//! Hand-written scanner producing the token sequence.
//!
//! Single left-to-right pass with one-character lookahead, consuming the
//! shortest token at each position. Error conditions come back as
//! [`LexError`] values, never as panics or process exits.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::keywords;
use patois_ir::{Span, Token, TokenKind};

/// Horizontal and vertical whitespace discarded between tokens.
#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Characters that may form an identifier run.
#[inline]
fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// One-token-at-a-time scanner over a [`Cursor`].
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    /// Scan the whole source into a token sequence ending in exactly one
    /// `Eof` token.
    pub(crate) fn scan(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.cursor.eat_while(is_whitespace);
            let start = self.cursor.pos();
            let Some(ch) = self.cursor.advance() else {
                tokens.push(Token::new(
                    TokenKind::Eof,
                    "",
                    Span::from_range(start..start),
                ));
                return Ok(tokens);
            };
            let token = match ch {
                '(' => self.single(start, TokenKind::LParen),
                ')' => self.single(start, TokenKind::RParen),
                '{' => self.single(start, TokenKind::LBrace),
                '}' => self.single(start, TokenKind::RBrace),
                '[' => self.single(start, TokenKind::LBracket),
                ']' => self.single(start, TokenKind::RBracket),
                ',' => self.single(start, TokenKind::Comma),
                ':' => self.single(start, TokenKind::Colon),
                ';' => self.single(start, TokenKind::Semicolon),
                '.' => self.single(start, TokenKind::Dot),
                '+' => self.single(start, TokenKind::Plus),
                '-' => self.single(start, TokenKind::Minus),
                '*' => self.single(start, TokenKind::Star),
                '/' => self.single(start, TokenKind::Slash),
                '%' => self.single(start, TokenKind::Percent),
                '=' => self.equal(start),
                '&' => self.ampersand(start),
                '!' => self.bang(start),
                '<' => self.single(start, TokenKind::Lt),
                '>' => self.single(start, TokenKind::Gt),
                '|' => self.single(start, TokenKind::Pipe),
                '0'..='9' => self.number(start),
                '"' => self.string(start)?,
                ch if is_ident_char(ch) => self.ident_or_keyword(start),
                ch => return Err(LexError::UnrecognizedChar { ch, offset: start }),
            };
            tokens.push(token);
        }
    }

    fn single(&self, start: usize, kind: TokenKind) -> Token {
        self.token(start, kind)
    }

    /// `=` followed by `=` is equality-compare, otherwise assignment.
    fn equal(&mut self, start: usize) -> Token {
        if self.cursor.eat_if('=') {
            self.token(start, TokenKind::EqEq)
        } else {
            self.token(start, TokenKind::Assign)
        }
    }

    /// `&` followed by `&` is logical-and, otherwise bitwise-and.
    fn ampersand(&mut self, start: usize) -> Token {
        if self.cursor.eat_if('&') {
            self.token(start, TokenKind::AmpAmp)
        } else {
            self.token(start, TokenKind::Amp)
        }
    }

    /// `!` followed by `=` is not-equal-compare, otherwise logical-not.
    fn bang(&mut self, start: usize) -> Token {
        if self.cursor.eat_if('=') {
            self.token(start, TokenKind::NotEq)
        } else {
            self.token(start, TokenKind::Bang)
        }
    }

    /// `[0-9]+` — integers only; no decimal point, sign, or exponent.
    fn number(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|ch| ch.is_ascii_digit());
        self.token(start, TokenKind::Int)
    }

    /// `"`-delimited run. The token text is the content between the
    /// quotes verbatim — no escape processing, so a literal `"` cannot
    /// appear inside a string.
    fn string(&mut self, start: usize) -> Result<Token, LexError> {
        let content_start = self.cursor.pos();
        let Some(close) = self.cursor.find_byte(b'"') else {
            return Err(LexError::UnterminatedString { offset: start });
        };
        self.cursor.advance_to(close);
        let content = self.cursor.slice_from(content_start).to_owned();
        self.cursor.advance_to(close + 1);
        Ok(Token::new(
            TokenKind::Str,
            content,
            Span::from_range(start..self.cursor.pos()),
        ))
    }

    /// `[A-Za-z_]+`, resolved against the keyword table as a whole run.
    fn ident_or_keyword(&mut self, start: usize) -> Token {
        self.cursor.eat_while(is_ident_char);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
        self.token(start, kind)
    }

    fn token(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::from_range(start..self.cursor.pos()),
        )
    }
}
