//! Function declarations, calls, closures, and the builtins.

use super::{eval_err, eval_ok, run_in};
use crate::{global_scope, EvalErrorKind, Value};
use pretty_assertions::assert_eq;

#[test]
fn call_yields_the_body_last_statement() {
    assert_eq!(eval_ok("fn add(a, b) { a + b } add(2, 3)"), Value::int(5));
    assert_eq!(eval_ok("fn f() { 1; 2 } f()"), Value::int(2));
    assert_eq!(eval_ok("fn f() { } f()"), Value::Null);
}

#[test]
fn missing_arguments_bind_to_null() {
    assert_eq!(eval_ok("fn first(a, b) { a } first(1)"), Value::int(1));
    assert_eq!(eval_ok("fn second(a, b) { b } second(1)"), Value::Null);
}

#[test]
fn excess_arguments_are_ignored() {
    assert_eq!(eval_ok("fn one(a) { a } one(1, 2, 3)"), Value::int(1));
}

#[test]
fn parameters_shadow_outer_bindings() {
    assert_eq!(
        eval_ok("let a = 10; fn id(a) { a } id(1) + a"),
        Value::int(11)
    );
}

#[test]
fn closures_capture_the_declaring_scope_by_reference() {
    // Mutation after declaration is visible through the closure.
    assert_eq!(eval_ok("let x = 1; fn get() { x } x = 5; get()"), Value::int(5));
}

#[test]
fn closures_can_mutate_their_captured_scope() {
    let source = "
        let count = 0;
        fn bump() { count = count + 1; count }
        bump();
        bump()
    ";
    assert_eq!(eval_ok(source), Value::int(2));
}

#[test]
fn inner_functions_close_over_the_call_frame() {
    let source = "
        fn outer(a) {
            fn inner(b) { a + b }
            inner(10)
        }
        outer(1)
    ";
    assert_eq!(eval_ok(source), Value::int(11));
}

#[test]
fn closures_outlive_the_frame_that_made_them() {
    let source = "
        fn make() {
            let hidden = 42;
            fn reveal() { hidden }
            reveal
        }
        const f = make();
        f()
    ";
    assert_eq!(eval_ok(source), Value::int(42));
}

#[test]
fn recursion() {
    let source = "
        fn fact(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }
        fact(5)
    ";
    assert_eq!(eval_ok(source), Value::int(120));
}

#[test]
fn function_bindings_are_immutable() {
    assert_eq!(
        eval_err("fn f() { 1 } f = 2;").kind,
        EvalErrorKind::ImmutableAssignment {
            name: "f".to_owned()
        }
    );
    assert_eq!(
        eval_err("fn f() { 1 } fn f() { 2 }").kind,
        EvalErrorKind::Redeclaration {
            name: "f".to_owned()
        }
    );
}

#[test]
fn calling_a_non_function_fails() {
    assert_eq!(
        eval_err("let x = 1; x()").kind,
        EvalErrorKind::NotCallable { type_name: "int" }
    );
}

#[test]
fn builtins_are_callable_from_source() {
    assert_eq!(eval_ok(r#"len("abc")"#), Value::int(3));
    assert_eq!(eval_ok("type(1)"), Value::string("int"));
    assert_eq!(eval_ok("type(len)"), Value::string("function"));
    assert_eq!(eval_ok(r#"str(42) + "!""#), Value::string("42!"));
    assert_eq!(eval_ok("print(1, 2)"), Value::Null);
}

#[test]
fn scope_persists_across_programs_like_a_repl() {
    let scope = global_scope();
    run_in("let x = 1;", &scope).unwrap();
    run_in("fn double(n) { n * 2 }", &scope).unwrap();
    assert_eq!(run_in("double(x + 1)", &scope), Ok(Value::int(4)));
}
