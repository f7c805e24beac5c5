/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors include unexpected tokens, unparsable integer
/// literals, illegal characters, and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, operator and type mismatches,
/// invalid hash keys, bad builtin arguments, and division by zero. Their
/// rendered messages are stable and matched by tests.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
