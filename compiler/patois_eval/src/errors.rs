//! Evaluation error types and their factory constructors.
//!
//! Every runtime failure is an [`EvalError`] with a typed
//! [`EvalErrorKind`], so hosts can match on the category while the
//! `Display` impl produces the human-readable message. The factory
//! functions are the only construction points used by the evaluator.

use patois_ir::{BinaryOp, UnaryOp};
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<crate::value::Value, EvalError>;

/// A fatal runtime error. Aborts the current program evaluation; the
/// host decides whether to stop (file mode) or continue (REPL).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Variables and bindings
    UndefinedVariable { name: String },
    Redeclaration { name: String },
    ImmutableAssignment { name: String },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow { operation: &'static str },

    // Types and operators
    InvalidBinaryOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    InvalidUnaryOperand {
        op: UnaryOp,
        operand: &'static str,
    },
    NotCallable { type_name: &'static str },
    NotAnObject { type_name: &'static str },
    InvalidKey { type_name: &'static str },
    InvalidAssignmentTarget,

    // Builtins
    WrongArgType {
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EvalErrorKind::UndefinedVariable { name } => {
                write!(f, "undefined variable `{name}`")
            }
            EvalErrorKind::Redeclaration { name } => {
                write!(f, "`{name}` is already declared in this scope")
            }
            EvalErrorKind::ImmutableAssignment { name } => {
                write!(f, "cannot assign to immutable binding `{name}`")
            }
            EvalErrorKind::DivisionByZero => f.write_str("division by zero"),
            EvalErrorKind::ModuloByZero => f.write_str("modulo by zero"),
            EvalErrorKind::IntegerOverflow { operation } => {
                write!(f, "integer overflow in `{operation}`")
            }
            EvalErrorKind::InvalidBinaryOperands { op, left, right } => {
                write!(f, "invalid operands to `{op}`: {left} and {right}")
            }
            EvalErrorKind::InvalidUnaryOperand { op, operand } => {
                write!(f, "invalid operand to unary `{op}`: {operand}")
            }
            EvalErrorKind::NotCallable { type_name } => {
                write!(f, "value of type {type_name} is not callable")
            }
            EvalErrorKind::NotAnObject { type_name } => {
                write!(f, "cannot access members of a {type_name}")
            }
            EvalErrorKind::InvalidKey { type_name } => {
                write!(f, "cannot use a {type_name} as a member key")
            }
            EvalErrorKind::InvalidAssignmentTarget => {
                f.write_str("invalid assignment target")
            }
            EvalErrorKind::WrongArgType {
                builtin,
                expected,
                got,
            } => {
                write!(f, "`{builtin}` expects {expected}, got {got}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

// Factory constructors

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::UndefinedVariable {
            name: name.to_owned(),
        },
    }
}

pub fn redeclaration(name: &str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::Redeclaration {
            name: name.to_owned(),
        },
    }
}

pub fn immutable_assignment(name: &str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::ImmutableAssignment {
            name: name.to_owned(),
        },
    }
}

pub fn division_by_zero() -> EvalError {
    EvalError {
        kind: EvalErrorKind::DivisionByZero,
    }
}

pub fn modulo_by_zero() -> EvalError {
    EvalError {
        kind: EvalErrorKind::ModuloByZero,
    }
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::IntegerOverflow { operation },
    }
}

pub fn invalid_binary_operands(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::InvalidBinaryOperands { op, left, right },
    }
}

pub fn invalid_unary_operand(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::InvalidUnaryOperand { op, operand },
    }
}

pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::NotCallable { type_name },
    }
}

pub fn not_an_object(type_name: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::NotAnObject { type_name },
    }
}

pub fn invalid_key(type_name: &'static str) -> EvalError {
    EvalError {
        kind: EvalErrorKind::InvalidKey { type_name },
    }
}

pub fn invalid_assignment_target() -> EvalError {
    EvalError {
        kind: EvalErrorKind::InvalidAssignmentTarget,
    }
}

pub fn wrong_arg_type(
    builtin: &'static str,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError {
        kind: EvalErrorKind::WrongArgType {
            builtin,
            expected,
            got,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            undefined_variable("ghost").to_string(),
            "undefined variable `ghost`"
        );
        assert_eq!(
            invalid_binary_operands(BinaryOp::Lt, "int", "string").to_string(),
            "invalid operands to `<`: int and string"
        );
        assert_eq!(division_by_zero().to_string(), "division by zero");
    }
}
