//! Statement grammar.
//!
//! One method per statement form, dispatched on the leading token:
//! `let`/`const` declarations, `fn` declarations, `if`, `for`, and bare
//! expression statements. Expression parsing lives in [`expr`].

mod expr;

use crate::error::ParseError;
use crate::Parser;
use patois_ir::{DeclKind, Program, Stmt, TokenKind};
use tracing::{debug, trace};

impl Parser<'_> {
    /// Parse the whole stream into a [`Program`].
    pub(crate) fn program(mut self) -> Result<Program, ParseError> {
        debug!("parsing program");
        let mut statements = Vec::new();
        if self.cursor.is_empty() {
            return Ok(Program { statements });
        }
        while !self.cursor.at_end() {
            statements.push(self.statement()?);
        }
        Ok(Program { statements })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        trace!(kind = ?self.cursor.kind(), "statement dispatch");
        match self.cursor.kind() {
            TokenKind::Let => self.declaration(DeclKind::Let),
            TokenKind::Const => self.declaration(DeclKind::Const),
            TokenKind::Fn => self.fn_declaration(),
            TokenKind::If => self.if_statement(),
            TokenKind::For => self.for_statement(),
            _ => self.expression_statement(),
        }
    }

    /// `let name;` / `let name = expr;` / `const name = expr;`
    ///
    /// The declaring `;` is required; `const` additionally requires the
    /// initializer.
    fn declaration(&mut self, kind: DeclKind) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let name = self.cursor.expect(TokenKind::Ident)?.text;
        let init = if self.cursor.eat(TokenKind::Assign) {
            Some(self.expression()?)
        } else {
            None
        };
        if kind == DeclKind::Const && init.is_none() {
            return Err(ParseError::ConstWithoutInitializer {
                name,
                span: keyword.span,
            });
        }
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Decl { kind, name, init })
    }

    /// `fn name(a, b) { body }`
    fn fn_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect(TokenKind::Ident)?.text;
        self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                params.push(self.cursor.expect(TokenKind::Ident)?.text);
                if !self.cursor.eat(TokenKind::Comma) || self.cursor.check(TokenKind::RParen) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        let body = self.block()?;
        Ok(Stmt::Fn { name, params, body })
    }

    /// `if (cond) { … }` with an optional `else` block or chained
    /// `else if`, which nests as an `If` statement inside the else block.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::LParen)?;
        let cond = self.expression()?;
        self.cursor.expect(TokenKind::RParen)?;
        let then_block = self.block()?;
        let else_block = if self.cursor.eat(TokenKind::Else) {
            if self.cursor.check(TokenKind::If) {
                Some(vec![self.if_statement()?])
            } else {
                Some(self.block()?)
            }
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
        })
    }

    /// `for (init; cond; update) { body }`
    ///
    /// The initializer is a declaration (which consumes its own `;`) or an
    /// expression followed by `;`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::LParen)?;
        let init = match self.cursor.kind() {
            TokenKind::Let => self.declaration(DeclKind::Let)?,
            TokenKind::Const => self.declaration(DeclKind::Const)?,
            _ => {
                let init = Stmt::Expr(self.expression()?);
                self.cursor.expect(TokenKind::Semicolon)?;
                init
            }
        };
        let cond = self.expression()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        let update = self.expression()?;
        self.cursor.expect(TokenKind::RParen)?;
        let body = self.block()?;
        Ok(Stmt::For {
            init: Box::new(init),
            cond,
            update,
            body,
        })
    }

    /// `{ stmt* }`
    pub(crate) fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.at_end() {
            statements.push(self.statement()?);
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(statements)
    }

    /// A bare expression; the terminating `;` is optional.
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Stmt::Expr(expr))
    }
}
