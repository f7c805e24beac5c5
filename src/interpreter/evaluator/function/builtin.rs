use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::check_arity},
        value::core::Value,
    },
};

/// Returns the length of a string (in bytes) or an array (in elements).
///
/// Accepts exactly one argument; any other argument kind is unsupported.
///
/// # Example
/// ```
/// use minima::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// let length = len(vec![Value::from("hello")]).unwrap();
/// assert_eq!(length, Value::Integer(5));
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn len(args: Vec<Value>) -> EvalResult<Value> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                         kind:    other.kind(), }),
    }
}

/// Returns the first element of an array, or `null` for an empty array.
pub fn first(args: Vec<Value>) -> EvalResult<Value> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ExpectedArray { builtin: "first",
                                                   kind:    other.kind(), }),
    }
}

/// Returns the last element of an array, or `null` for an empty array.
pub fn last(args: Vec<Value>) -> EvalResult<Value> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ExpectedArray { builtin: "last",
                                                   kind:    other.kind(), }),
    }
}

/// Returns a new array holding everything but the first element, or `null`
/// for an empty array. The argument is left untouched.
///
/// # Example
/// ```
/// use minima::interpreter::{evaluator::function::builtin::rest, value::core::Value};
///
/// let tail = rest(vec![Value::from(vec![Value::Integer(1), Value::Integer(2)])]).unwrap();
/// assert_eq!(tail, Value::from(vec![Value::Integer(2)]));
///
/// let empty = rest(vec![Value::from(Vec::new())]).unwrap();
/// assert_eq!(empty, Value::Null);
/// ```
pub fn rest(args: Vec<Value>) -> EvalResult<Value> {
    check_arity(&args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(RuntimeError::ExpectedArray { builtin: "rest",
                                                   kind:    other.kind(), }),
    }
}

/// Returns a new array with a value appended. The original array is not
/// modified; arrays behave as persistent values.
pub fn push(mut args: Vec<Value>) -> EvalResult<Value> {
    check_arity(&args, 2)?;

    let array = args.remove(0);
    let value = args.remove(0);

    match array {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(value);
            Ok(Value::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::ExpectedArray { builtin: "push",
                                                   kind:    other.kind(), }),
    }
}

/// Prints each argument on its own line and returns `null`.
///
/// This is the language's only observable side effect. Values print in
/// their inspect form, the same representation the interactive prompt
/// shows.
#[allow(clippy::unnecessary_wraps)]
pub fn puts(args: Vec<Value>) -> EvalResult<Value> {
    for arg in &args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
