//! # minima
//!
//! minima is a small, dynamically-typed expression language implemented as
//! a tree-walking interpreter. It offers integers, booleans, strings,
//! arrays, hash maps, first-class functions with lexical closures,
//! conditionals, `let` bindings, early `return`, and a handful of builtin
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::{EvalResult, eval_program},
        lexer::tokenize,
        parser::statement::parse_program,
        value::{core::Value, environment::Env},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree, along with the
/// canonical textual form of every node. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders each node's canonical textual form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. Parse errors carry line numbers and are collected
/// non-fatally; runtime error messages are stable and matched by tests.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and environments to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source string into a program.
///
/// Tokenizes the whole input and hands it to the parser. Parsing never
/// fails as a whole: the result is the list of statements that parsed
/// together with every collected parse error. Callers decide how to treat
/// a non-empty error list; the bundled CLI refuses to evaluate in that
/// case.
///
/// # Parameters
/// - `source`: The source text.
///
/// # Returns
/// The parsed [`Program`] and all parse errors, in source order.
///
/// # Example
/// ```
/// use minima::parse;
///
/// let (program, errors) = parse("let two = 1 + 1;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let two = (1 + 1);");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    parse_program(&tokenize(source))
}

/// Evaluates a parsed program in the given environment.
///
/// The environment is caller-supplied so that consecutive evaluations can
/// share bindings; the interactive prompt relies on this. The result is
/// `None` when the final statement produces no value (a `let` binding) or
/// the program is empty.
///
/// # Errors
/// Returns the first runtime error the program raises.
///
/// # Example
/// ```
/// use minima::{evaluate, interpreter::value::{core::Value, environment::Env}, parse};
///
/// let (program, _) = parse("let double = fn(x) { x * 2 }; double(21)");
/// let env = Env::new();
///
/// let result = evaluate(&program, &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(42)));
/// ```
pub fn evaluate(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    eval_program(program, env)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string in a fresh environment. The first parse error aborts before
/// evaluation; a runtime error aborts at the statement that raised it.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minima::get_result;
///
/// // Simple program: the result is computed and no error occurs.
/// let source = "let result = 2 + 2; result";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let source = "let y = x + 1;"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str,
                  auto_print: bool)
                  -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);
    if let Some(error) = errors.into_iter().next() {
        return Err(Box::new(error));
    }

    let env = Env::new();
    let result = evaluate(&program, &env)?;

    if auto_print && let Some(value) = &result {
        println!("{value}");
    }

    Ok(result)
}
