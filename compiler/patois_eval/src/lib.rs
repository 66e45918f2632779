//! Tree-walking interpreter for Patois.
//!
//! Walks the AST produced by `patois_parse`, producing runtime values
//! and mutating scope frames as a side effect. Execution is
//! single-threaded and synchronous: a program runs to completion (or to
//! its first error) before control returns to the host.

pub mod builtins;
pub mod environment;
pub mod errors;
mod exec;
mod operators;
mod shared;
pub mod value;

#[cfg(test)]
mod tests;

pub use builtins::global_scope;
pub use environment::{AssignError, DeclareError, Mutability, Scope, ScopeRef};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::eval_program;
pub use shared::Shared;
pub use value::{FunctionValue, NativeFn, ObjectMap, Value};
