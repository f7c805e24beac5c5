/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST depth-first, evaluates expressions and
/// statements against an environment, applies functions and builtins, and
/// propagates early returns and runtime errors. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Threads the environment chain through every evaluation.
/// - Reports runtime errors such as unknown identifiers or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles integer and string literals, identifiers, and operators.
/// - Surfaces unrecognized input as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using top-down operator precedence: every token knows
/// how strongly it binds in infix position, and prefix/infix parselets
/// assemble expressions accordingly.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity.
/// - Collects parse errors non-fatally and recovers at statement
///   boundaries.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, booleans, strings, arrays, hashes, functions and
/// builtins, together with the environment chain that holds bindings and
/// the hash-key machinery backing hash values.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides the shared, closure-capturable environment chain.
/// - Reduces hashable values to fixed-size hash keys.
pub mod value;
