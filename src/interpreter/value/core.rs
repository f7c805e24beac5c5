use std::rc::Rc;

use crate::{
    ast::BlockStatement,
    interpreter::{
        evaluator::core::EvalResult,
        value::{environment::Env, hash_key::HashValue},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations. Heap-backed
/// payloads sit behind `Rc` so that values clone cheaply.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// negation (`!`). Any value may serve as a condition; only `false` and
    /// `null` count as false.
    Bool(bool),
    /// A UTF-8 string.
    Str(Rc<String>),
    /// The absence of a value: missing `else` branches, out-of-range array
    /// indices and absent hash keys all produce `null`.
    Null,
    /// Wrapper produced by a `return` statement. Blocks pass it through
    /// untouched; a function call or the program boundary unwraps it once.
    /// It never escapes the evaluator.
    Return(Box<Self>),
    /// A function together with the environment it closed over.
    Function(Rc<FunctionValue>),
    /// A native function provided by the interpreter.
    Builtin(Builtin),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable values to arbitrary values.
    Hash(Rc<HashValue>),
}

/// Type tag of a [`Value`], used by error messages and hash keys.
///
/// The `Display` form is the conventional upper-case name that appears in
/// runtime error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Tag of [`Value::Integer`].
    Integer,
    /// Tag of [`Value::Bool`].
    Bool,
    /// Tag of [`Value::Str`].
    Str,
    /// Tag of [`Value::Null`].
    Null,
    /// Tag of [`Value::Return`].
    Return,
    /// Tag of [`Value::Function`].
    Function,
    /// Tag of [`Value::Builtin`].
    Builtin,
    /// Tag of [`Value::Array`].
    Array,
    /// Tag of [`Value::Hash`].
    Hash,
}

/// A user-defined function: parameter list, body, and the captured
/// environment. Calling it evaluates the body in a fresh frame enclosed by
/// the captured one, which is what makes closures work.
#[derive(Debug)]
pub struct FunctionValue {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment the function literal was evaluated in.
    pub env:        Env,
}

/// The signature of a native builtin: evaluated arguments in, value out.
pub type BuiltinFn = fn(Vec<Value>) -> EvalResult<Value>;

/// A builtin function value. Builtins are first-class: they can be bound,
/// passed around, and called through variables like any other function.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The native implementation.
    pub func: BuiltinFn,
}

impl Value {
    /// Returns the type tag of this value.
    ///
    /// # Example
    /// ```
    /// use minima::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Integer(1).kind(), ValueKind::Integer);
    /// assert_eq!(Value::Null.kind(), ValueKind::Null);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Bool(_) => ValueKind::Bool,
            Self::Str(_) => ValueKind::Str,
            Self::Null => ValueKind::Null,
            Self::Return(_) => ValueKind::Return,
            Self::Function(_) => ValueKind::Function,
            Self::Builtin(_) => ValueKind::Builtin,
            Self::Array(_) => ValueKind::Array,
            Self::Hash(_) => ValueKind::Hash,
        }
    }

    /// Tests this value as a condition.
    ///
    /// Only `false` and `null` are false; every other value, including `0`,
    /// `""` and empty aggregates, is true.
    ///
    /// # Example
    /// ```
    /// use minima::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Array`](Self::Array).
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

// Equality here is a host-language concern (tests, hash entries). Shared
// aggregates compare by identity, mirroring how the language's own `==`
// treats them; plain data compares structurally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Return(l), Self::Return(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::new(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::new(v.to_string()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(hash) => {
                write!(f, "{{")?;

                for (index, (key, value)) in hash.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, "}}")
            },
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Bool => "BOOLEAN",
            Self::Str => "STRING",
            Self::Null => "NULL",
            Self::Return => "RETURN_VALUE",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
        };
        write!(f, "{name}")
    }
}
