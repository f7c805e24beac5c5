use minima::{get_result, interpreter::value::core::Value};
use walkdir::WalkDir;

fn assert_value(src: &str, expected: Value) {
    match get_result(src, false) {
        Ok(Some(value)) => assert_eq!(value, expected, "script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_integer(src: &str, expected: i64) {
    assert_value(src, Value::Integer(expected));
}

fn assert_error(src: &str, expected: &str) {
    match get_result(src, false) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(e) => assert_eq!(e.to_string(), expected, "script: {src}"),
    }
}

#[test]
fn script_corpus_works() {
    let mut count = 0;

    for root in ["tests/scripts", "demos"] {
        for entry in WalkDir::new(root).into_iter()
                                       .filter_map(Result::ok)
                                       .filter(|e| {
                                           e.path().extension().is_some_and(|ext| ext == "mini")
                                       })
        {
            let path = entry.path();
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

            count += 1;
            if let Err(e) = get_result(&content, false) {
                panic!("Script {path:?} failed: {e}");
            }
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts or demos");
}

#[test]
fn bindings_and_integer_arithmetic() {
    assert_integer("let x = 1 + 2; x", 3);
    assert_integer("let x = 7 * 9; x", 63);
    assert_integer("let x = 8 - 5; x", 3);
    assert_integer("let x = 10 / 2; x", 5);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
    assert_integer("-50 + 100 + -50", 0);
}

#[test]
fn comparisons_and_negation() {
    assert_value("1 < 2", Value::Bool(true));
    assert_value("1 > 2", Value::Bool(false));
    assert_value("1 == 1", Value::Bool(true));
    assert_value("1 != 1", Value::Bool(false));
    assert_value("true == true", Value::Bool(true));
    assert_value("true != false", Value::Bool(true));
    assert_value("(1 < 2) == true", Value::Bool(true));
    assert_value("(1 > 2) == true", Value::Bool(false));
    assert_value("!true", Value::Bool(false));
    assert_value("!5", Value::Bool(false));
    assert_value("!!5", Value::Bool(true));
    assert_integer("-5", -5);
    assert_integer("--5", 5);
}

#[test]
fn truthiness_accepts_every_non_null_non_false_value() {
    // Zero and the empty string count as true; only false and null do not.
    assert_integer("if (0) { 1 } else { 2 }", 1);
    assert_integer("if (\"\") { 1 } else { 2 }", 1);
    assert_integer("if (false) { 1 } else { 2 }", 2);
    assert_value("!0", Value::Bool(false));
    assert_value("![]", Value::Bool(false));
}

#[test]
fn conditionals() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_value("if (false) { 10 }", Value::Null);
    assert_integer("let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };", 10);
}

#[test]
fn functions_and_calls() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
}

#[test]
fn early_return() {
    assert_integer("let f = fn(x) { return x; x + 10; }; f(1);", 1);
    assert_integer("5 * 5; return 2; 9;", 2);
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
    assert_integer("let f = fn() { if (true) { if (true) { return 3; } } return 7; }; f();", 3);
}

#[test]
fn closures() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
                   5);
    // A function sees bindings added to its environment after its creation.
    assert_integer("let counter = fn() { count }; let count = 5; counter();", 5);
    // Recursion works because the function resolves its own name at call
    // time through the captured environment.
    assert_integer("let fact = fn(n) { if (n < 1) { return 1; } n * fact(n - 1) }; fact(5);",
                   120);
}

#[test]
fn call_arity_is_positional() {
    assert_integer("let f = fn(x, y) { x }; f(1);", 1);
    assert_integer("fn(x) { x }(1, 2)", 1);
    assert_error("let f = fn(x, y) { y }; f(1);", "identifier not found: y");
}

#[test]
fn strings() {
    assert_value("\"Hello World!\"", Value::from("Hello World!"));
    assert_value("\"Hello\" + \" \" + \"World!\"", Value::from("Hello World!"));
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
}

#[test]
fn arrays() {
    assert_value("[1, 2 * 2, 3 + 3]",
                 Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let a = [1, 2, 3]; a[0] + a[1] + a[2];", 6);
    assert_value("[1, 2, 3][3]", Value::Null);
    assert_value("[1, 2, 3][-1]", Value::Null);
}

#[test]
fn array_builtins() {
    assert_integer("first([4, 5, 6])", 4);
    assert_value("first([])", Value::Null);
    assert_integer("last([4, 5, 6])", 6);
    assert_value("last([])", Value::Null);
    assert_value("rest([1, 2, 3])", Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_value("rest([])", Value::Null);
    assert_value("push([1], 2)", Value::from(vec![Value::Integer(1), Value::Integer(2)]));
    // push is persistent: the original array is untouched.
    assert_integer("let a = [1, 2]; let b = push(a, 3); len(a);", 2);
    assert_integer("let a = [1, 2, 3, 4]; let b = push(a, 5); len(b) + first(a) + last(rest(a));",
                   10);
}

#[test]
fn builtins_are_first_class() {
    assert_integer("let l = len; l(\"abc\")", 3);
    assert_value("puts(\"side effect\")", Value::Null);
}

#[test]
fn hashes() {
    assert_integer("let h = {\"one\": 1, \"two\": 2}; h[\"one\"] + h[\"two\"];", 3);
    assert_integer("{1: 10, 2: 20}[2]", 20);
    assert_integer("{true: 1, false: 0}[true]", 1);
    assert_value("{\"foo\": 5}[\"bar\"]", Value::Null);
    assert_value("{}[\"anything\"]", Value::Null);
    // Keys are compared by value, not by the expression that produced them.
    assert_integer("let key = \"o\" + \"ne\"; {\"one\": 1}[key]", 1);
    // Duplicate keys: the last value wins.
    assert_integer("{\"a\": 1, \"a\": 2}[\"a\"]", 2);
}

#[test]
fn hash_printing_preserves_insertion_order() {
    let value = get_result("{\"one\": 1, \"two\": 2, \"three\": 3}", false).unwrap()
                                                                           .unwrap();
    assert_eq!(value.to_string(), "{one: 1, two: 2, three: 3}");
}

#[test]
fn aggregate_equality_is_identity() {
    // Freshly built aggregates are distinct objects, like everything that
    // is not an integer, boolean or null.
    assert_value("[1, 2] == [1, 2]", Value::Bool(false));
    assert_value("let a = [1, 2]; a == a", Value::Bool(true));
    assert_value("{} == {}", Value::Bool(false));
    assert_value("5 == true", Value::Bool(false));
    assert_value("5 != true", Value::Bool(true));
}

#[test]
fn runtime_error_messages() {
    assert_error("foobar;", "identifier not found: foobar");
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("\"Hello\" - \"World\"", "unknown operator: STRING - STRING");
    assert_error("\"a\" == \"a\"", "unknown operator: STRING == STRING");
    assert_error("5(3)", "not a function: INTEGER");
    assert_error("\"name\"[0]", "index operator not supported: STRING");
    assert_error("{\"name\": \"minima\"}[fn(x) { x }];", "unusable as hash key: FUNCTION");
    assert_error("{[1, 2]: \"wat\"}", "unusable as hash key: ARRAY");
    assert_error("1 / 0", "division by zero");
}

#[test]
fn builtin_error_messages() {
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "wrong number of arguments. got=2, want=1");
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");
    assert_error("last(\"x\")", "argument to `last` must be ARRAY, got STRING");
    assert_error("rest(true)", "argument to `rest` must be ARRAY, got BOOLEAN");
    assert_error("push(1, 1)", "argument to `push` must be ARRAY, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn errors_propagate_through_operands() {
    // The first error wins and arrives unwrapped, no matter how deeply it
    // was raised.
    assert_error("let a = missing + 1; a;", "identifier not found: missing");
    assert_error("[1, missing, 3]", "identifier not found: missing");
    assert_error("{\"k\": missing}", "identifier not found: missing");
    assert_error("len(missing)", "identifier not found: missing");
    assert_error("(1 / 0) + (2 + missing)", "division by zero");
}

#[test]
fn let_produces_no_printable_value() {
    let result = get_result("let quiet = 1;", false).unwrap();
    assert_eq!(result, None);
}
