//! Declarations, scoping, `if`, and `for`.

use super::{eval_err, eval_ok, run};
use crate::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;

#[test]
fn program_yields_the_last_statement_value() {
    assert_eq!(eval_ok("1; 2; 3"), Value::int(3));
    assert_eq!(eval_ok(""), Value::Null);
    assert_eq!(eval_ok("let x = 9;"), Value::Null);
}

#[test]
fn let_assign_roundtrip() {
    assert_eq!(eval_ok("let x = 5; x = x + 1; x"), Value::int(6));
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_eq!(eval_ok("let x = 0; let y = (x = 7); y"), Value::int(7));
}

#[test]
fn let_without_initializer_is_null() {
    assert_eq!(eval_ok("let x; x"), Value::Null);
}

#[test]
fn const_cannot_be_reassigned() {
    let err = eval_err("const y = 5; y = 6;");
    assert_eq!(
        err.kind,
        EvalErrorKind::ImmutableAssignment {
            name: "y".to_owned()
        }
    );
}

#[test]
fn redeclaration_in_the_same_scope_fails() {
    assert_eq!(
        eval_err("let x = 1; let x = 2;").kind,
        EvalErrorKind::Redeclaration {
            name: "x".to_owned()
        }
    );
}

#[test]
fn blocks_shadow_without_leaking() {
    assert_eq!(eval_ok("let x = 1; if (1) { let x = 2; x }"), Value::int(2));
    assert_eq!(eval_ok("let x = 1; if (1) { let x = 2; } x"), Value::int(1));
}

#[test]
fn if_picks_exactly_one_branch() {
    assert_eq!(eval_ok("if (0) { 1 } else { 2 }"), Value::int(2));
    assert_eq!(eval_ok("if (1) { 1 } else { 2 }"), Value::int(1));
}

#[test]
fn if_without_else_on_falsy_is_null() {
    assert_eq!(eval_ok("if (0) { 1 }"), Value::Null);
}

#[test]
fn falsy_matrix() {
    for falsy in ["0", r#""""#, "null", "false"] {
        let source = format!("if ({falsy}) {{ 1 }} else {{ 2 }}");
        assert_eq!(eval_ok(&source), Value::int(2), "{falsy} should be falsy");
    }
    for truthy in ["1", r#""0""#, "true", "[1]", r#""false""#] {
        let source = format!("if ({truthy}) {{ 1 }} else {{ 2 }}");
        assert_eq!(eval_ok(&source), Value::int(1), "{truthy} should be truthy");
    }
}

#[test]
fn else_if_chain() {
    let source = "let x = 5;
        if (x == 1) { 10 } else if (x == 5) { 20 } else { 30 }";
    assert_eq!(eval_ok(source), Value::int(20));
}

#[test]
fn for_runs_body_exactly_three_times_in_order() {
    let source = r#"
        let seen = "";
        for (let i = 0; i < 3; i = i + 1) {
            seen = seen + i;
        }
        seen
    "#;
    assert_eq!(eval_ok(source), Value::string("012"));
}

#[test]
fn for_with_false_condition_never_runs() {
    assert_eq!(
        eval_ok("let n = 0; for (let i = 0; i < 0; i = i + 1) { n = n + 1; } n"),
        Value::int(0)
    );
}

#[test]
fn for_body_bindings_do_not_leak() {
    assert!(matches!(
        eval_err("for (let i = 0; i < 3; i = i + 1) { let tmp = i; } tmp").kind,
        EvalErrorKind::UndefinedVariable { name } if name == "tmp"
    ));
    // The loop variable lives in the header scope, not the enclosing one.
    assert!(matches!(
        eval_err("for (let i = 0; i < 3; i = i + 1) { } i").kind,
        EvalErrorKind::UndefinedVariable { name } if name == "i"
    ));
}

#[test]
fn for_body_scope_is_fresh_each_iteration() {
    // A shared body scope would trip the redeclaration check on round two.
    let source = "let n = 0;
        for (let i = 0; i < 3; i = i + 1) { let once = 1; n = n + once; }
        n";
    assert_eq!(eval_ok(source), Value::int(3));
}

#[test]
fn undefined_variable_errors_name_the_variable() {
    for source in ["ghost", "ghost = 1;", "ghost()"] {
        assert_eq!(
            run(source).map_err(|err| err.kind),
            Err(EvalErrorKind::UndefinedVariable {
                name: "ghost".to_owned()
            }),
            "{source}"
        );
    }
}
