use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::core::ValueKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error stops evaluation at the statement that raised it and
/// propagates outward unchanged; the language has no construct to catch it.
/// The `Display` form of each variant is part of the public contract and is
/// what the REPL prints after an `ERROR: ` prefix.
pub enum RuntimeError {
    /// A name resolved to neither a binding nor a builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownUnaryOperator {
        /// The operator.
        op:      UnaryOperator,
        /// The kind of the operand.
        operand: ValueKind,
    },
    /// An infix operator was applied to operands of matching kind that do
    /// not support it.
    UnknownBinaryOperator {
        /// The kind of the left operand.
        left:  ValueKind,
        /// The operator.
        op:    BinaryOperator,
        /// The kind of the right operand.
        right: ValueKind,
    },
    /// An infix operator was applied to operands of different kinds.
    TypeMismatch {
        /// The kind of the left operand.
        left:  ValueKind,
        /// The operator.
        op:    BinaryOperator,
        /// The kind of the right operand.
        right: ValueKind,
    },
    /// Something other than a function or builtin was called.
    NotAFunction {
        /// The kind of the callee.
        kind: ValueKind,
    },
    /// The index operator was applied to a value that cannot be indexed.
    IndexNotSupported {
        /// The kind of the indexed value.
        kind: ValueKind,
    },
    /// A value that cannot serve as a hash key was used as one.
    UnusableHashKey {
        /// The kind of the offending key.
        kind: ValueKind,
    },
    /// A builtin received an argument of a kind it does not handle.
    UnsupportedArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// The kind of the offending argument.
        kind:    ValueKind,
    },
    /// An array-taking builtin received something that is not an array.
    ExpectedArray {
        /// The builtin's name.
        builtin: &'static str,
        /// The kind of the offending argument.
        kind:    ValueKind,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the builtin requires.
        want: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::UnknownUnaryOperator { op, operand } => {
                write!(f, "unknown operator: {op}{operand}")
            },
            Self::UnknownBinaryOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::UnsupportedArgument { builtin, kind } => {
                write!(f, "argument to `{builtin}` not supported, got {kind}")
            },
            Self::ExpectedArray { builtin, kind } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {kind}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
