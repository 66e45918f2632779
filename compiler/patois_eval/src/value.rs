//! Runtime values for the Patois interpreter.
//!
//! A closed tagged union; all construction of shared payloads goes
//! through the factory methods so `Shared` handles are never built by
//! hand at call sites.

use crate::environment::ScopeRef;
use crate::errors::EvalError;
use crate::shared::Shared;
use patois_ir::Stmt;
use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// Backing map of an object value.
pub type ObjectMap = FxHashMap<String, Value>;

/// Host-provided callable: evaluated arguments in, value or error out.
pub type NativeFn = fn(&[Value]) -> Result<Value, EvalError>;

/// Runtime value in the Patois interpreter.
#[derive(Clone, Debug)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// String value (cheaply clonable; values are copied around freely).
    Str(Rc<str>),
    /// Boolean value.
    Bool(bool),
    /// The null sentinel.
    Null,
    /// Object: a shared mutable map from string keys to values. Array
    /// literals produce objects keyed `"0"`, `"1"`, …
    Object(Shared<ObjectMap>),
    /// Native (host-provided) function, with its global binding name.
    Native(NativeFn, &'static str),
    /// User function: a closure over its declaring scope.
    Function(FunctionValue),
}

/// A user function value.
///
/// Captures the declaring scope by reference, not by copy: the frame
/// stays alive as long as any closure created inside it survives, and
/// later mutation of the frame is visible through the closure.
#[derive(Clone)]
pub struct FunctionValue {
    pub name: Rc<str>,
    pub params: Rc<[String]>,
    pub body: Rc<[Stmt]>,
    pub scope: ScopeRef,
}

impl Value {
    pub fn int(value: i64) -> Value {
        Value::Int(value)
    }

    pub fn string(value: impl Into<String>) -> Value {
        Value::Str(Rc::from(value.into()))
    }

    pub fn bool(value: bool) -> Value {
        Value::Bool(value)
    }

    pub fn object(map: ObjectMap) -> Value {
        Value::Object(Shared::new(map))
    }

    /// The name the language uses for this value's type in diagnostics
    /// and the `type` builtin.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Object(_) => "object",
            Value::Native(..) | Value::Function(_) => "function",
        }
    }

    /// The truthiness rule: `false`, `null`, `0`, and `""` are falsy,
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Null => false,
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::Object(_) | Value::Native(..) | Value::Function(_) => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Object(map) => {
                let map = map.borrow();
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                f.write_str("{")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match map.get(*key) {
                        Some(value) => write!(f, "{key}: {value}")?,
                        None => write!(f, "{key}: null")?,
                    }
                }
                f.write_str("}")
            }
            Value::Native(_, name) => write!(f, "<native fn {name}>"),
            Value::Function(func) => write!(f, "<fn {}>", func.name),
        }
    }
}

/// Host-side equality, used by tests and the REPL. Language-level `==`
/// lives in the operator table and rejects mixed types instead.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Native(_, a), Value::Native(_, b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(&a.body, &b.body),
            _ => false,
        }
    }
}

// Scope handles inside closures would make a derived Debug recurse
// through the environment chain; keep it shallow.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matrix() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::int(0).is_truthy());
        assert!(!Value::string("").is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::int(-1).is_truthy());
        assert!(Value::string("0").is_truthy());
        assert!(Value::object(ObjectMap::default()).is_truthy());
    }

    #[test]
    fn display_is_stable_for_objects() {
        let mut map = ObjectMap::default();
        map.insert("b".to_owned(), Value::int(2));
        map.insert("a".to_owned(), Value::string("x"));
        assert_eq!(Value::object(map).to_string(), "{a: x, b: 2}");
    }

    #[test]
    fn object_equality_is_by_identity() {
        let a = Value::object(ObjectMap::default());
        let b = Value::object(ObjectMap::default());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
