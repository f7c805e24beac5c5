use minima::parse;

fn assert_canonical(src: &str, expected: &str) {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected parse errors for {src}: {errors:?}");
    assert_eq!(program.to_string(), expected, "source: {src}");
}

fn assert_error_count(src: &str, expected: usize) {
    let (_, errors) = parse(src);
    assert_eq!(errors.len(), expected, "source: {src}, errors: {errors:?}");
}

#[test]
fn statements_render_canonically() {
    assert_canonical("let x = 5;", "let x = 5;");
    assert_canonical("let y = true;", "let y = true;");
    assert_canonical("let foobar = y;", "let foobar = y;");
    assert_canonical("return 5;", "return 5;");
    assert_canonical("return x + y;", "return (x + y);");
    assert_canonical("foobar;", "foobar");
}

#[test]
fn operator_precedence_groups_as_expected() {
    assert_canonical("-a * b", "((-a) * b)");
    assert_canonical("!-a", "(!(-a))");
    assert_canonical("a + b + c", "((a + b) + c)");
    assert_canonical("a + b - c", "((a + b) - c)");
    assert_canonical("a * b * c", "((a * b) * c)");
    assert_canonical("a + b / c", "(a + (b / c))");
    assert_canonical("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
    assert_canonical("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
    assert_canonical("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
    assert_canonical("3 > 5 == false", "((3 > 5) == false)");
    assert_canonical("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
    assert_canonical("(5 + 5) * 2", "((5 + 5) * 2)");
    assert_canonical("2 / (5 + 5)", "(2 / (5 + 5))");
    assert_canonical("-(5 + 5)", "(-(5 + 5))");
    assert_canonical("!(true == true)", "(!(true == true))");
}

#[test]
fn calls_and_indexing_bind_tightest() {
    assert_canonical("add(b * c)", "add((b * c))");
    assert_canonical("add(a, b, 1, 2 * 3, 4 + 5)", "add(a, b, 1, (2 * 3), (4 + 5))");
    assert_canonical("a + add(b * c) + d", "((a + add((b * c))) + d)");
    assert_canonical("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)");
    assert_canonical("add(a * b[2], b[1], 2 * [1, 2][1])",
                     "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))");
    assert_canonical("myArray[1 + 1]", "(myArray[(1 + 1)])");
}

#[test]
fn composite_literals_render_canonically() {
    assert_canonical("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
    assert_canonical("[]", "[]");
    assert_canonical("{\"a\": 1, \"b\": 2}", "{a:1, b:2}");
    assert_canonical("{}", "{}");
    assert_canonical("{1: 1 + 1, 2: 2 * 2}", "{1:(1 + 1), 2:(2 * 2)}");
    assert_canonical("fn(x, y) { x + y }", "fn(x, y)(x + y)");
    assert_canonical("fn() { 1 }", "fn()1");
    assert_canonical("if (x < y) { x }", "if(x < y) x");
    assert_canonical("if (x < y) { x } else { y }", "if(x < y) xelse y");
}

#[test]
fn canonical_forms_reparse_to_themselves() {
    for src in ["let x = ((1 * 2) + 3);",
                "return (a + b);",
                "((-a) * b)",
                "add(1, (2 * 3))",
                "(myArray[(1 + 1)])",
                "[1, (2 * 2)]"]
    {
        let (program, errors) = parse(src);
        assert!(errors.is_empty(), "unexpected parse errors for {src}: {errors:?}");
        let rendered = program.to_string();
        let (reparsed, errors) = parse(&rendered);
        assert!(errors.is_empty(), "canonical form failed to reparse: {rendered}");
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn semicolons_after_expressions_are_optional() {
    assert_canonical("1 + 2", "(1 + 2)");
    assert_canonical("1 + 2;", "(1 + 2)");
    // And a missing terminator after let/return is tolerated at end of
    // input only.
    assert_canonical("let x = 5", "let x = 5;");
    assert_canonical("return 5", "return 5;");
    assert_error_count("let x = 5 let y = 6;", 1);
}

#[test]
fn parser_recovers_at_statement_boundaries() {
    // Three statements, two broken: both errors are reported and the one
    // healthy statement still parses.
    let (program, errors) = parse("let = 5; let x 5; 838383;");
    assert_eq!(errors.len(), 2);
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "838383");
}

#[test]
fn malformed_input_reports_errors() {
    assert_error_count("let x 12 * 3;", 1);
    assert_error_count("if (x { 1 };", 1);
    assert_error_count("fn(a b) { a };", 1);
    assert_error_count("[1, 2;", 1);
    assert_error_count("{\"a\" 1};", 1);
    assert_error_count("5 @ 5;", 1);
}

#[test]
fn oversized_integer_literals_are_parse_errors() {
    let (_, errors) = parse("92233720368547758079;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("could not parse"),
            "unexpected message: {}",
            errors[0]);
}
