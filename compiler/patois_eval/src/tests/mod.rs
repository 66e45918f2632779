//! End-to-end evaluator tests.
//!
//! These drive source text through the full pipeline (lex → parse →
//! eval) against a freshly seeded global scope, the same way the CLI
//! does.

mod control_tests;
mod function_tests;

use crate::{eval_program, global_scope, EvalError, EvalResult, ScopeRef, Value};

/// Run `source` as a complete program in a fresh global scope.
pub(crate) fn run(source: &str) -> EvalResult {
    let scope = global_scope();
    run_in(source, &scope)
}

/// Run `source` against an existing scope (REPL-style).
pub(crate) fn run_in(source: &str, scope: &ScopeRef) -> EvalResult {
    let tokens = patois_lexer::lex(source).unwrap();
    let program = patois_parse::parse_program(&tokens).unwrap();
    eval_program(&program, scope)
}

pub(crate) fn eval_ok(source: &str) -> Value {
    match run(source) {
        Ok(value) => value,
        Err(err) => panic!("evaluation of {source:?} failed: {err}"),
    }
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    match run(source) {
        Ok(value) => panic!("expected {source:?} to fail, got {value}"),
        Err(err) => err,
    }
}
