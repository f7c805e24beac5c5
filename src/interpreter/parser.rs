/// Infix parselets.
///
/// Handles everything that extends an already parsed expression: binary
/// operators, call argument lists, and index brackets.
pub mod binary;
/// Brace-delimited statement blocks, shared by `if` branches and function
/// bodies.
pub mod block;
/// The precedence ladder and the top-down operator precedence loop that
/// drives all expression parsing.
pub mod core;
/// Program and statement parsing, including non-fatal error recovery at
/// statement boundaries.
pub mod statement;
/// Prefix parselets.
///
/// Handles everything an expression can start with: literals, identifiers,
/// prefix operators, groupings, conditionals, function literals, arrays and
/// hashes.
pub mod unary;
/// Small shared helpers: comma-separated lists, identifiers, and token
/// expectations.
pub mod utils;
