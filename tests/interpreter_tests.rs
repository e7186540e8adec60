// Integration tests for the Monkey evaluator
//
// These tests run complete Monkey programs and check the resulting
// object. Coverage:
// - Arithmetic, comparison, and truthiness
// - Control flow (if/else, return propagation)
// - Bindings, functions, and closures
// - Arrays, hashes, and the hash key model
// - Runtime error production and short-circuiting
// - Built-in functions and in-language composition over them

use monkey::interpreter::{self, HashKey, Object};
use monkey::lexer::Lexer;
use monkey::parser::Parser;
use std::rc::Rc;

fn run(source: &str) -> Object {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parse errors for {:?}: {:?}",
        source,
        parser.errors()
    );
    interpreter::eval_program(&program, &interpreter::new_env())
}

fn assert_integer(source: &str, want: i64) {
    match run(source) {
        Object::Integer(got) => assert_eq!(got, want, "source: {}", source),
        other => panic!("expected Integer({}) for {:?}, got {:?}", want, source, other),
    }
}

fn assert_boolean(source: &str, want: bool) {
    match run(source) {
        Object::Boolean(got) => assert_eq!(got, want, "source: {}", source),
        other => panic!("expected Boolean({}) for {:?}, got {:?}", want, source, other),
    }
}

fn assert_error(source: &str, want: &str) {
    match run(source) {
        Object::Error(got) => assert_eq!(got, want, "source: {}", source),
        other => panic!("expected Error({:?}) for {:?}, got {:?}", want, source, other),
    }
}

fn assert_null(source: &str) {
    match run(source) {
        Object::Null => {}
        other => panic!("expected Null for {:?}, got {:?}", source, other),
    }
}

#[test]
fn evaluates_integer_arithmetic() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];
    for (source, want) in cases {
        assert_integer(source, want);
    }
}

#[test]
fn evaluates_boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("1 < 2 == true", true),
        ("(1 > 2) == false", true),
    ];
    for (source, want) in cases {
        assert_boolean(source, want);
    }
}

#[test]
fn bang_toggles_truthiness() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
    ];
    for (source, want) in cases {
        assert_boolean(source, want);
    }
}

#[test]
fn everything_but_null_and_false_is_truthy() {
    // Zero is truthy: the zero-is-falsy variant is not this language.
    assert_boolean("!0", false);
    assert_integer("if (0) { 1 } else { 2 }", 1);
    assert_integer("if (\"\") { 1 } else { 2 }", 1);
    assert_integer("if ([]) { 1 } else { 2 }", 1);
    // A null condition comes from indexing past the end of an array.
    assert_integer("if ([1][5]) { 1 } else { 2 }", 2);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_null("if (1 > 2) { 10 }");
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
}

#[test]
fn return_statements_unwrap_at_the_top_level() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
    ];
    for (source, want) in cases {
        assert_integer(source, want);
    }
    assert_null("return;");
}

#[test]
fn bare_return_in_a_function_yields_null() {
    assert_null("let f = fn() { return; 10; }; f()");
}

#[test]
fn runtime_errors_short_circuit_with_the_innermost_message() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
        ("\"Hello\" < \"World\"", "unknown operator: STRING < STRING"),
        ("{\"name\": \"Monkey\"}[fn(x) { x }];", "unusable as hash key: FUNCTION"),
        ("{[1, 2]: 1}", "unusable as hash key: ARRAY"),
        ("let x = y; x;", "identifier not found: y"),
        ("999[1]", "index operator not supported: INTEGER"),
        ("5(1)", "not a function: INTEGER"),
        ("10 / 0", "division by zero"),
    ];
    for (source, want) in cases {
        assert_error(source, want);
    }
}

#[test]
fn let_bindings_resolve_through_the_environment() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];
    for (source, want) in cases {
        assert_integer(source, want);
    }
}

#[test]
fn a_let_statement_evaluates_to_its_bound_value() {
    assert_integer("let a = 41 + 1;", 42);
}

#[test]
fn inner_bindings_shadow_without_mutating_outer_frames() {
    assert_integer(
        "let x = 5; let f = fn() { let x = 10; x }; f(); x;",
        5,
    );
    assert_integer("let x = 5; let f = fn(x) { x }; f(99); x;", 5);
}

#[test]
fn function_objects_carry_parameters_and_body() {
    match run("fn(x) { x + 2; };") {
        Object::Function(func) => {
            assert_eq!(func.params, vec!["x"]);
            assert_eq!(func.body.to_string(), "(x + 2)");
        }
        other => panic!("expected Function, got {:?}", other),
    }
}

#[test]
fn function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, want) in cases {
        assert_integer(source, want);
    }
}

#[test]
fn return_inside_a_function_is_invisible_outside_it() {
    assert_integer(
        "let f = fn() { return 10; }; let g = fn() { f() + 1 }; g();",
        11,
    );
}

#[test]
fn closures_capture_their_definition_environment() {
    assert_integer(
        "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
        5,
    );
    // The captured environment is live, not a copy.
    assert_integer(
        "let counter = 0; let get = fn() { counter }; let counter = 7; get();",
        7,
    );
}

#[test]
fn higher_order_functions() {
    assert_integer(
        "let apply = fn(f, x) { f(x) }; let inc = fn(n) { n + 1 }; apply(inc, 41);",
        42,
    );
}

#[test]
fn recursion_through_the_environment() {
    assert_integer(
        "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10);",
        55,
    );
}

#[test]
fn calling_with_wrong_arity_is_an_error() {
    assert_error(
        "let add = fn(x, y) { x + y }; add(1);",
        "wrong number of arguments: want=2, got=1",
    );
    assert_error(
        "let id = fn(x) { x }; id(1, 2);",
        "wrong number of arguments: want=1, got=2",
    );
}

#[test]
fn string_literals_concatenation_and_equality() {
    assert_eq!(run("\"Hello World!\""), Object::str("Hello World!".to_string()));
    assert_eq!(
        run("\"Hello\" + \" \" + \"World!\""),
        Object::str("Hello World!".to_string())
    );
    assert_boolean("\"a\" == \"a\"", true);
    assert_boolean("\"a\" != \"b\"", true);
}

#[test]
fn array_literals_and_indexing() {
    match run("[1, 2 * 2, 3 + 3]") {
        Object::Array(elements) => {
            assert_eq!(elements.as_ref(), &vec![
                Object::Integer(1),
                Object::Integer(4),
                Object::Integer(6),
            ]);
        }
        other => panic!("expected Array, got {:?}", other),
    }

    let cases = [
        ("[1, 2, 3][0]", 1),
        ("[1, 2, 3][1]", 2),
        ("[1, 2, 3][2]", 3),
        ("let i = 0; [1][i];", 1),
        ("[1, 2, 3][1 + 1];", 3),
        ("let myArray = [1, 2, 3]; myArray[2];", 3),
        ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6),
    ];
    for (source, want) in cases {
        assert_integer(source, want);
    }

    // Out-of-range indexing yields null, never an error.
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][5]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn hash_literals_and_indexing() {
    let source = r#"let two = "two";
    {
        "one": 10 - 9,
        two: 1 + 1,
        "thr" + "ee": 6 / 2,
        4: 4,
        true: 5,
        false: 6
    }"#;
    match run(source) {
        Object::Hash(map) => {
            assert_eq!(map.len(), 6);
            let expect = [
                (HashKey::String(Rc::new("one".to_string())), 1),
                (HashKey::String(Rc::new("two".to_string())), 2),
                (HashKey::String(Rc::new("three".to_string())), 3),
                (HashKey::Integer(4), 4),
                (HashKey::Boolean(true), 5),
                (HashKey::Boolean(false), 6),
            ];
            for (key, want) in expect {
                let pair = map.get(&key).unwrap_or_else(|| panic!("missing key {:?}", key));
                assert_eq!(pair.value, Object::Integer(want));
            }
        }
        other => panic!("expected Hash, got {:?}", other),
    }

    let cases = [
        ("{\"one\": 1}[\"one\"]", 1),
        ("let key = \"foo\"; {\"foo\": 5}[key]", 5),
        ("{5: 5}[5]", 5),
        ("{true: 5}[true]", 5),
        ("{false: 5}[false]", 5),
    ];
    for (source, want) in cases {
        assert_integer(source, want);
    }

    // A missing key yields null, never an error.
    assert_null("{\"foo\": 5}[\"bar\"]");
    assert_null("{}[\"foo\"]");
}

#[test]
fn hash_keys_use_fnv1a_for_strings() {
    // Reference values for FNV-1a 64: the offset basis for the empty
    // string, and the well-known digest for "a".
    let empty = HashKey::String(Rc::new(String::new()));
    assert_eq!(empty.hash_value(), 0xcbf2_9ce4_8422_2325);
    let a = HashKey::String(Rc::new("a".to_string()));
    assert_eq!(a.hash_value(), 0xaf63_dc4c_8601_ec8c);

    assert_eq!(HashKey::Integer(42).hash_value(), 42);
    assert_eq!(HashKey::Boolean(true).hash_value(), 1);
    assert_eq!(HashKey::Boolean(false).hash_value(), 0);
}

#[test]
fn hash_key_equality_is_exact_not_hash_based() {
    // Structural hashes may collide; equality never conflates values.
    let a = HashKey::String(Rc::new("a".to_string()));
    let b = HashKey::String(Rc::new("b".to_string()));
    assert_ne!(a, b);
    assert_eq!(a, HashKey::String(Rc::new("a".to_string())));

    // Integer 1 and true share a structural hash value but differ in
    // kind, so both fit in one hash.
    assert_eq!(HashKey::Integer(1).hash_value(), HashKey::Boolean(true).hash_value());
    assert_integer("{1: 10, true: 20}[1]", 10);
    assert_integer("{1: 10, true: 20}[true]", 20);
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "wrong number of arguments. got=2, want=1");
    assert_error("len()", "wrong number of arguments. got=0, want=1");
}

#[test]
fn builtin_first_last_rest() {
    assert_integer("first([1, 2, 3])", 1);
    assert_null("first([])");
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");

    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_error("last(1)", "argument to `last` must be ARRAY, got INTEGER");

    assert_eq!(
        run("rest([1, 2, 3])"),
        Object::array(vec![Object::Integer(2), Object::Integer(3)])
    );
    assert_eq!(run("rest(rest([1, 2, 3]))"), Object::array(vec![Object::Integer(3)]));
    assert_eq!(run("rest([1])"), Object::array(vec![]));
    assert_null("rest([])");
}

#[test]
fn builtin_push_does_not_mutate() {
    assert_eq!(
        run("push([1, 2], 3)"),
        Object::array(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)])
    );
    assert_eq!(
        run("let a = [1]; let b = push(a, 2); a"),
        Object::array(vec![Object::Integer(1)])
    );
    assert_error("push(1, 1)", "argument to `push` must be ARRAY, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtin_puts_returns_null() {
    assert_null("puts(\"hello\")");
    assert_null("puts(1, true, [1, 2])");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_integer("let len = fn(x) { 99 }; len([1, 2, 3])", 99);
}

#[test]
fn map_and_reduce_compose_from_builtins() {
    let source = r#"
    let map = fn(arr, f) {
        let iter = fn(arr, accumulated) {
            if (len(arr) == 0) {
                accumulated
            } else {
                iter(rest(arr), push(accumulated, f(first(arr))));
            }
        };
        iter(arr, []);
    };
    let reduce = fn(arr, initial, f) {
        let iter = fn(arr, result) {
            if (len(arr) == 0) {
                result
            } else {
                iter(rest(arr), f(result, first(arr)));
            }
        };
        iter(arr, initial);
    };
    let sum = fn(arr) { reduce(arr, 0, fn(acc, el) { acc + el }) };
    let double = fn(x) { x * 2 };
    sum(map([1, 2, 3, 4], double));
    "#;
    assert_integer(source, 20);
}

#[test]
fn inspect_renders_values_for_display() {
    assert_eq!(run("5").inspect(), "5");
    assert_eq!(run("true").inspect(), "true");
    assert_eq!(run("\"hi\"").inspect(), "hi");
    assert_eq!(run("[1, \"two\", true]").inspect(), "[1, two, true]");
    assert_eq!(run("[1, 2, 3][9]").inspect(), "null");
    assert_eq!(run("{\"a\": 1}").inspect(), "{a: 1}");
    assert_eq!(run("5 + true").inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_eq!(run("len").inspect(), "builtin function len");
}
