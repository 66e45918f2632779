//! Parse error types.
//!
//! Structured variants with enough context for a one-line
//! expected-vs-found message. There is no recovery mode: a parse either
//! produces one `Program` or one of these.

use patois_ir::{Span, Token, TokenKind};
use std::fmt;

/// A fatal syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A required token was absent.
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },
    /// The left side of `=` was neither an identifier nor a member
    /// expression.
    InvalidAssignmentTarget { span: Span },
    /// `const` declarations require an initializer.
    ConstWithoutInitializer { name: String, span: Span },
    /// A numeric literal that does not fit in an `i64`.
    IntLiteralTooLarge { text: String, span: Span },
}

/// Render a token the way error messages refer to it.
pub(crate) fn found_label(token: &Token) -> String {
    match token.kind {
        TokenKind::Ident => format!("identifier `{}`", token.text),
        TokenKind::Str => format!("string \"{}\"", token.text),
        TokenKind::Eof => "end of input".to_owned(),
        _ => format!("`{}`", token.text),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected, found, ..
            } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseError::InvalidAssignmentTarget { .. } => {
                write!(
                    f,
                    "invalid assignment target: only identifiers and member expressions can be assigned to"
                )
            }
            ParseError::ConstWithoutInitializer { name, .. } => {
                write!(f, "`const {name}` is missing an initializer")
            }
            ParseError::IntLiteralTooLarge { text, .. } => {
                write!(f, "integer literal `{text}` is too large")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use patois_ir::Token;

    #[test]
    fn expected_vs_found_message() {
        let err = ParseError::UnexpectedToken {
            expected: "`;`",
            found: found_label(&Token::new(TokenKind::Ident, "oops", Span::new(4, 8))),
            span: Span::new(4, 8),
        };
        assert_eq!(err.to_string(), "expected `;`, found identifier `oops`");
    }
}
