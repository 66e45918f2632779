//! Patois CLI library.
//!
//! Owns everything outside the core pipeline crates: the slang
//! rewriter that canonicalises informal vocabulary before lexing, the
//! rewrite → lex → parse → eval pipeline, and the `run`/`repl`
//! commands behind the `patois` binary.

pub mod commands;
pub mod pipeline;
pub mod rewrite;

pub use pipeline::{run_source, PipelineError};
pub use rewrite::rewrite;
