//! Lexer for Patois.
//!
//! Converts rewritten source text into an ordered token sequence. The
//! scan is a single left-to-right pass with one-character lookahead; the
//! returned sequence always terminates in exactly one end-of-input token.
//! A character outside every recognized class is a fatal [`LexError`],
//! returned as a value so the host decides how to surface it.

mod cursor;
mod error;
mod keywords;
mod scanner;

pub use error::LexError;

use patois_ir::Token;

/// Tokenize source text.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    scanner::Scanner::new(source).scan()
}
