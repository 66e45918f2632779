//! Built-in bindings seeded into the global scope.
//!
//! The global scope is populated exactly once, at interpreter start-up,
//! before any user code runs: the `true`/`false`/`null` constants (the
//! lexer has no keywords for them) and the native functions. All of them
//! are immutable bindings; user code in child scopes may still shadow
//! them with fresh declarations.

use crate::environment::{Mutability, ScopeRef};
use crate::errors::{wrong_arg_type, EvalResult};
use crate::value::Value;

/// Create a fresh global scope with all builtins installed.
pub fn global_scope() -> ScopeRef {
    let scope = ScopeRef::root();
    install(&scope);
    scope
}

/// Seed `scope` with the built-in constants and native functions.
pub fn install(scope: &ScopeRef) {
    scope.define("true", Value::Bool(true), Mutability::Immutable);
    scope.define("false", Value::Bool(false), Mutability::Immutable);
    scope.define("null", Value::Null, Mutability::Immutable);

    scope.define(
        "print",
        Value::Native(native_print, "print"),
        Mutability::Immutable,
    );
    scope.define(
        "len",
        Value::Native(native_len, "len"),
        Mutability::Immutable,
    );
    scope.define(
        "type",
        Value::Native(native_type, "type"),
        Mutability::Immutable,
    );
    scope.define(
        "str",
        Value::Native(native_str, "str"),
        Mutability::Immutable,
    );
}

/// `print(a, b, …)` — space-separated values and a newline; yields null.
fn native_print(args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
    Ok(Value::Null)
}

/// `len(x)` — character count of a string, entry count of an object.
fn native_len(args: &[Value]) -> EvalResult {
    let arg = args.first().unwrap_or(&Value::Null);
    match arg {
        Value::Str(s) => Ok(Value::int(i64::try_from(s.chars().count()).unwrap_or(i64::MAX))),
        Value::Object(map) => Ok(Value::int(
            i64::try_from(map.borrow().len()).unwrap_or(i64::MAX),
        )),
        other => Err(wrong_arg_type(
            "len",
            "a string or object",
            other.type_name(),
        )),
    }
}

/// `type(x)` — the value's type name as a string.
fn native_type(args: &[Value]) -> EvalResult {
    let arg = args.first().unwrap_or(&Value::Null);
    Ok(Value::string(arg.type_name()))
}

/// `str(x)` — stringify any value.
fn native_str(args: &[Value]) -> EvalResult {
    let arg = args.first().unwrap_or(&Value::Null);
    Ok(Value::string(arg.to_string()))
}
