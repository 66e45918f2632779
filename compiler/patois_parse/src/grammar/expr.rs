//! Expression grammar: precedence climbing.
//!
//! Levels, lowest to highest: assignment (right-associative) → `|` →
//! `&&` → `&` → equality → relational → additive → multiplicative →
//! unary → call/member access → primary. All binary operators are
//! left-associative.

use crate::error::ParseError;
use crate::Parser;
use patois_ir::{BinaryOp, Expr, MemberKey, TokenKind, UnaryOp};

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `target = value`, right-associative. The target must be an
    /// identifier or a member expression — checked here, before the value
    /// is even parsed.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.bit_or()?;
        if self.cursor.check(TokenKind::Assign) {
            let eq = self.cursor.advance();
            if !matches!(left, Expr::Ident(_) | Expr::Member { .. }) {
                return Err(ParseError::InvalidAssignmentTarget { span: eq.span });
            }
            let value = self.assignment()?;
            return Ok(Expr::Assign {
                target: Box::new(left),
                value: Box::new(value),
            });
        }
        Ok(left)
    }

    fn bit_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.logical_and()?;
        while let Some(op) = self.match_bit_or_op() {
            self.cursor.advance();
            let right = self.logical_and()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.bit_and()?;
        while let Some(op) = self.match_logical_and_op() {
            self.cursor.advance();
            let right = self.bit_and()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn bit_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;
        while let Some(op) = self.match_bit_and_op() {
            self.cursor.advance();
            let right = self.equality()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.relational()?;
        while let Some(op) = self.match_equality_op() {
            self.cursor.advance();
            let right = self.relational()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.additive()?;
        while let Some(op) = self.match_relational_op() {
            self.cursor.advance();
            let right = self.additive()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.multiplicative()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.unary()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            self.cursor.advance();
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }
        self.postfix()
    }

    /// Call, member, and index expressions chain off a primary:
    /// `a.b[0](1).c` parses left to right.
    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        loop {
            if self.cursor.eat(TokenKind::LParen) {
                let args = self.call_args()?;
                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                };
            } else if self.cursor.eat(TokenKind::Dot) {
                let name = self.cursor.expect(TokenKind::Ident)?.text;
                expr = Expr::Member {
                    object: Box::new(expr),
                    key: MemberKey::Named(name),
                };
            } else if self.cursor.eat(TokenKind::LBracket) {
                let index = self.expression()?;
                self.cursor.expect(TokenKind::RBracket)?;
                expr = Expr::Member {
                    object: Box::new(expr),
                    key: MemberKey::Computed(Box::new(index)),
                };
            } else {
                return Ok(expr);
            }
        }
    }

    /// Arguments after a consumed `(`, up to and including the `)`.
    fn call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) || self.cursor.check(TokenKind::RParen) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok(args)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.kind() {
            TokenKind::Int => {
                let token = self.cursor.advance();
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| ParseError::IntLiteralTooLarge {
                        text: token.text.clone(),
                        span: token.span,
                    })?;
                Ok(Expr::Int(value))
            }
            TokenKind::Str => Ok(Expr::Str(self.cursor.advance().text)),
            TokenKind::Ident => Ok(Expr::Ident(self.cursor.advance().text)),
            TokenKind::LParen => {
                self.cursor.advance();
                let expr = self.expression()?;
                self.cursor.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::LBrace => self.object_literal(),
            TokenKind::LBracket => self.array_literal(),
            _ => Err(self.cursor.unexpected("an expression")),
        }
    }

    /// `{ key: expr, shorthand, }` — a key without `:` is shorthand for
    /// looking the key up as an identifier at evaluation time.
    fn object_literal(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let mut entries = Vec::new();
        if !self.cursor.check(TokenKind::RBrace) {
            loop {
                let key = self.cursor.expect(TokenKind::Ident)?.text;
                let value = if self.cursor.eat(TokenKind::Colon) {
                    Some(self.expression()?)
                } else {
                    None
                };
                entries.push((key, value));
                if !self.cursor.eat(TokenKind::Comma) || self.cursor.check(TokenKind::RBrace) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(Expr::Object(entries))
    }

    /// `[a, b, c]`
    fn array_literal(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect(TokenKind::LBracket)?;
        let mut elements = Vec::new();
        if !self.cursor.check(TokenKind::RBracket) {
            loop {
                elements.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) || self.cursor.check(TokenKind::RBracket) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RBracket)?;
        Ok(Expr::Array(elements))
    }

    // Operator matching helpers, one per precedence level.

    fn match_bit_or_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            _ => None,
        }
    }

    fn match_logical_and_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::AmpAmp => Some(BinaryOp::And),
            _ => None,
        }
    }

    fn match_bit_and_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::Amp => Some(BinaryOp::BitAnd),
            _ => None,
        }
    }

    fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            _ => None,
        }
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}
