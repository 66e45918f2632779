//! Binary and unary operator implementations.
//!
//! Direct enum dispatch over the fixed value set; pattern matching keeps
//! the table exhaustive and checked at build time. `&&` is included for
//! totality, but the evaluator short-circuits it before operands reach
//! this table.

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_operands, invalid_unary_operand,
    modulo_by_zero, EvalResult,
};
use crate::value::Value;
use patois_ir::{BinaryOp, UnaryOp};

/// Evaluate a binary operation over already-evaluated operands.
pub(crate) fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            int_arithmetic(left, right, op)
        }
        BinaryOp::BitOr | BinaryOp::BitAnd => bitwise(left, right, op),
        BinaryOp::Eq | BinaryOp::NotEq => equality(left, right, op),
        BinaryOp::Lt | BinaryOp::Gt => relational(left, right, op),
        // Normally short-circuited by the evaluator; with both operands
        // in hand the result is the deciding operand.
        BinaryOp::And => Ok(if left.is_truthy() { right } else { left }),
    }
}

/// Evaluate a unary operation.
pub(crate) fn evaluate_unary(operand: Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, operand) => Ok(Value::bool(!operand.is_truthy())),
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::int)
            .ok_or_else(|| integer_overflow("-")),
        (UnaryOp::Neg, operand) => Err(invalid_unary_operand(op, operand.type_name())),
    }
}

/// `+` is concatenation when either operand is a string (the other side
/// is stringified), numeric addition otherwise.
fn add(left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            Ok(Value::string(format!("{left}{right}")))
        }
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(*b)
            .map(Value::int)
            .ok_or_else(|| integer_overflow("+")),
        _ => Err(invalid_binary_operands(
            BinaryOp::Add,
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn int_arithmetic(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (&left, &right) else {
        return Err(invalid_binary_operands(
            op,
            left.type_name(),
            right.type_name(),
        ));
    };
    let (a, b) = (*a, *b);
    let result = match op {
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b)
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            a.checked_rem(b)
        }
        _ => None,
    };
    result
        .map(Value::int)
        .ok_or_else(|| integer_overflow(op.symbol()))
}

fn bitwise(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::int(match op {
            BinaryOp::BitAnd => a & b,
            _ => a | b,
        })),
        _ => Err(invalid_binary_operands(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// `==` / `!=` over same-type scalars; mixed or non-scalar operands are
/// a type error, not `false`.
fn equality(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let equal = match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => {
            return Err(invalid_binary_operands(
                op,
                left.type_name(),
                right.type_name(),
            ))
        }
    };
    Ok(Value::bool(match op {
        BinaryOp::NotEq => !equal,
        _ => equal,
    }))
}

/// `<` / `>` over int/int (numeric) or string/string (lexicographic).
fn relational(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let ordering = match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        _ => {
            return Err(invalid_binary_operands(
                op,
                left.type_name(),
                right.type_name(),
            ))
        }
    };
    Ok(Value::bool(match op {
        BinaryOp::Gt => ordering.is_gt(),
        _ => ordering.is_lt(),
    }))
}
