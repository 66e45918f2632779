//! The rewrite → lex → parse → eval pipeline.
//!
//! Shared by file mode and the REPL. Each stage either fully succeeds
//! and hands its artifact to the next, or fails with its own typed error;
//! [`PipelineError`] carries the three-tier taxonomy (lexical, syntactic,
//! runtime) up to whichever host is driving.

use patois_eval::{eval_program, EvalError, ScopeRef, Value};
use patois_lexer::LexError;
use patois_parse::ParseError;
use std::fmt;
use tracing::debug;

use crate::rewrite::rewrite;

/// A failure in any pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Lex(err) => write!(f, "lexical error: {err}"),
            PipelineError::Parse(err) => write!(f, "syntax error: {err}"),
            PipelineError::Eval(err) => write!(f, "runtime error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Lex(err) => Some(err),
            PipelineError::Parse(err) => Some(err),
            PipelineError::Eval(err) => Some(err),
        }
    }
}

impl From<LexError> for PipelineError {
    fn from(err: LexError) -> Self {
        PipelineError::Lex(err)
    }
}

impl From<ParseError> for PipelineError {
    fn from(err: ParseError) -> Self {
        PipelineError::Parse(err)
    }
}

impl From<EvalError> for PipelineError {
    fn from(err: EvalError) -> Self {
        PipelineError::Eval(err)
    }
}

/// Run source text as one complete program against `scope`.
///
/// The text is rewritten first; the core stages only ever see canonical
/// vocabulary.
pub fn run_source(source: &str, scope: &ScopeRef) -> Result<Value, PipelineError> {
    debug!(bytes = source.len(), "running source");
    let canonical = rewrite(source);
    let tokens = patois_lexer::lex(&canonical)?;
    let program = patois_parse::parse_program(&tokens)?;
    Ok(eval_program(&program, scope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patois_eval::global_scope;
    use pretty_assertions::assert_eq;

    #[test]
    fn slang_source_runs_end_to_end() {
        let scope = global_scope();
        let source = r#"
            lowkey total = 0;
            grind (lowkey i = 0; i < 3; i = i + 1) { total = total + i; }
            vibecheck (total == 3) { "ok" } nah { "bad" }
        "#;
        assert_eq!(run_source(source, &scope), Ok(Value::string("ok")));
    }

    #[test]
    fn canonical_source_runs_unchanged() {
        let scope = global_scope();
        assert_eq!(
            run_source("let x = 5; x = x + 1; x", &scope),
            Ok(Value::int(6))
        );
    }

    #[test]
    fn stage_errors_keep_their_tier() {
        let scope = global_scope();
        assert!(matches!(
            run_source("let x @ 1;", &scope),
            Err(PipelineError::Lex(_))
        ));
        assert!(matches!(
            run_source("let = 5;", &scope),
            Err(PipelineError::Parse(_))
        ));
        assert!(matches!(
            run_source("1 / 0", &scope),
            Err(PipelineError::Eval(_))
        ));
    }

    #[test]
    fn error_messages_are_prefixed_by_tier() {
        let scope = global_scope();
        let err = match run_source("ghost", &scope) {
            Err(err) => err,
            Ok(value) => panic!("expected error, got {value}"),
        };
        assert_eq!(err.to_string(), "runtime error: undefined variable `ghost`");
    }

    #[test]
    fn scope_state_survives_between_runs() {
        let scope = global_scope();
        run_source("lowkey x = 1;", &scope).unwrap();
        assert_eq!(run_source("x + 1", &scope), Ok(Value::int(2)));
    }
}
