//! The tree walker.
//!
//! Dispatches by node tag over the closed AST; both matches are
//! exhaustive, so there is no unrecognized-node path at runtime. Every
//! evaluation either produces a value or aborts the current program with
//! an [`crate::EvalError`].

use crate::environment::{AssignError, Mutability, ScopeRef};
use crate::errors::{
    immutable_assignment, invalid_assignment_target, invalid_key, not_an_object, not_callable,
    redeclaration, undefined_variable, EvalError, EvalResult,
};
use crate::operators;
use crate::value::{FunctionValue, ObjectMap, Value};
use patois_ir::{BinaryOp, DeclKind, Expr, MemberKey, Program, Stmt};
use std::rc::Rc;

/// Evaluate a whole program in the given (global) scope, yielding the
/// value of its last statement.
pub fn eval_program(program: &Program, scope: &ScopeRef) -> EvalResult {
    let mut result = Value::Null;
    for stmt in &program.statements {
        result = eval_stmt(stmt, scope)?;
    }
    Ok(result)
}

/// Evaluate statements in order in `scope`, yielding the last value.
/// Callers that want isolation create the child scope themselves.
fn eval_block(statements: &[Stmt], scope: &ScopeRef) -> EvalResult {
    let mut result = Value::Null;
    for stmt in statements {
        result = eval_stmt(stmt, scope)?;
    }
    Ok(result)
}

fn eval_stmt(stmt: &Stmt, scope: &ScopeRef) -> EvalResult {
    match stmt {
        Stmt::Decl { kind, name, init } => {
            let value = match init {
                Some(expr) => eval_expr(expr, scope)?,
                None => Value::Null,
            };
            let mutability = match kind {
                DeclKind::Let => Mutability::Mutable,
                DeclKind::Const => Mutability::Immutable,
            };
            scope
                .declare(name.clone(), value, mutability)
                .map_err(|_| redeclaration(name))?;
            Ok(Value::Null)
        }
        Stmt::Fn { name, params, body } => {
            // Capture the *current* scope as the closure environment;
            // the body is not executed here.
            let function = Value::Function(FunctionValue {
                name: Rc::from(name.as_str()),
                params: Rc::from(params.clone()),
                body: Rc::from(body.clone()),
                scope: scope.clone(),
            });
            scope
                .declare(name.clone(), function, Mutability::Immutable)
                .map_err(|_| redeclaration(name))?;
            Ok(Value::Null)
        }
        Stmt::If {
            cond,
            then_block,
            else_block,
        } => {
            if eval_expr(cond, scope)?.is_truthy() {
                eval_block(then_block, &scope.child())
            } else if let Some(else_block) = else_block {
                eval_block(else_block, &scope.child())
            } else {
                Ok(Value::Null)
            }
        }
        Stmt::For {
            init,
            cond,
            update,
            body,
        } => {
            // The header scope holds the loop variable across iterations;
            // each iteration's body runs in a fresh child of it.
            let header = scope.child();
            eval_stmt(init, &header)?;
            while eval_expr(cond, &header)?.is_truthy() {
                eval_block(body, &header.child())?;
                eval_expr(update, &header)?;
            }
            Ok(Value::Null)
        }
        Stmt::Expr(expr) => eval_expr(expr, scope),
    }
}

fn eval_expr(expr: &Expr, scope: &ScopeRef) -> EvalResult {
    match expr {
        Expr::Int(n) => Ok(Value::int(*n)),
        Expr::Str(s) => Ok(Value::string(s.clone())),
        Expr::Ident(name) => scope
            .lookup(name)
            .ok_or_else(|| undefined_variable(name)),
        Expr::Unary { op, operand } => {
            let operand = eval_expr(operand, scope)?;
            operators::evaluate_unary(operand, *op)
        }
        Expr::Binary { op, left, right } => {
            // `&&` short-circuits: the right operand is not evaluated
            // when the left decides. Everything else is eager, left
            // before right.
            if *op == BinaryOp::And {
                let left = eval_expr(left, scope)?;
                if !left.is_truthy() {
                    return Ok(left);
                }
                return eval_expr(right, scope);
            }
            let left = eval_expr(left, scope)?;
            let right = eval_expr(right, scope)?;
            operators::evaluate_binary(left, right, *op)
        }
        Expr::Assign { target, value } => eval_assign(target, value, scope),
        Expr::Member { object, key } => {
            let object = eval_expr(object, scope)?;
            let key = member_key(key, scope)?;
            match object {
                // Absent keys read as null rather than erroring.
                Value::Object(map) => Ok(map.borrow().get(&key).cloned().unwrap_or(Value::Null)),
                other => Err(not_an_object(other.type_name())),
            }
        }
        Expr::Call { callee, args } => {
            let callee = eval_expr(callee, scope)?;
            let mut arg_values = Vec::with_capacity(args.len());
            for arg in args {
                arg_values.push(eval_expr(arg, scope)?);
            }
            eval_call(callee, arg_values)
        }
        Expr::Object(entries) => {
            let mut map = ObjectMap::default();
            for (key, value) in entries {
                let value = match value {
                    Some(expr) => eval_expr(expr, scope)?,
                    // Shorthand `{ key }`: look the key up by name.
                    None => scope
                        .lookup(key)
                        .ok_or_else(|| undefined_variable(key))?,
                };
                map.insert(key.clone(), value);
            }
            Ok(Value::object(map))
        }
        Expr::Array(elements) => {
            let mut map = ObjectMap::default();
            for (index, element) in elements.iter().enumerate() {
                map.insert(index.to_string(), eval_expr(element, scope)?);
            }
            Ok(Value::object(map))
        }
    }
}

/// Evaluate the right-hand side, then resolve the target and store,
/// yielding the assigned value.
fn eval_assign(target: &Expr, value_expr: &Expr, scope: &ScopeRef) -> EvalResult {
    let value = eval_expr(value_expr, scope)?;
    match target {
        Expr::Ident(name) => {
            scope.assign(name, value.clone()).map_err(|err| match err {
                AssignError::Undefined => undefined_variable(name),
                AssignError::Immutable => immutable_assignment(name),
            })?;
            Ok(value)
        }
        Expr::Member { object, key } => {
            let object = eval_expr(object, scope)?;
            let key = member_key(key, scope)?;
            match object {
                Value::Object(map) => {
                    map.borrow_mut().insert(key, value.clone());
                    Ok(value)
                }
                other => Err(not_an_object(other.type_name())),
            }
        }
        // The parser only produces identifier or member targets.
        _ => Err(invalid_assignment_target()),
    }
}

/// Resolve a member key to its string form: named keys as-is, computed
/// keys from an int (decimal) or string value.
fn member_key(key: &MemberKey, scope: &ScopeRef) -> Result<String, EvalError> {
    match key {
        MemberKey::Named(name) => Ok(name.clone()),
        MemberKey::Computed(expr) => match eval_expr(expr, scope)? {
            Value::Int(n) => Ok(n.to_string()),
            Value::Str(s) => Ok(s.to_string()),
            other => Err(invalid_key(other.type_name())),
        },
    }
}

/// Invoke a callee with already-evaluated arguments.
///
/// User functions run in a fresh child of their *captured* scope, with
/// parameters bound positionally: missing arguments bind to null, excess
/// arguments are discarded. The body's last statement is the call's
/// value.
fn eval_call(callee: Value, args: Vec<Value>) -> EvalResult {
    match callee {
        Value::Native(function, _) => function(&args),
        Value::Function(function) => {
            let frame = function.scope.child();
            for (index, param) in function.params.iter().enumerate() {
                let value = args.get(index).cloned().unwrap_or(Value::Null);
                frame.define(param.clone(), value, Mutability::Mutable);
            }
            eval_block(&function.body, &frame)
        }
        other => Err(not_callable(other.type_name())),
    }
}
