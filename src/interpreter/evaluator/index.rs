use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, hash_key::HashKey},
    },
};

/// Applies the index operator to two evaluated operands.
///
/// - `array[integer]` yields the element at that position; an index that
///   is negative or at/past the end yields `null` rather than an error.
/// - `hash[key]` looks the key up by its hash; a missing key yields
///   `null`, and a key that is not hashable is a runtime error.
/// - Every other combination does not support indexing.
///
/// # Parameters
/// - `left`: The evaluated value being indexed.
/// - `index`: The evaluated index.
///
/// # Returns
/// The addressed element, `null` for misses, or a runtime error.
///
/// # Example
/// ```
/// use minima::interpreter::{evaluator::index::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(20));
/// assert_eq!(eval_index(&array, &Value::Integer(9)).unwrap(), Value::Null);
/// assert_eq!(eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let element = usize::try_from(*position).ok()
                                                    .and_then(|position| elements.get(position));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        (Value::Hash(hash), key_value) => {
            let key = HashKey::of(key_value)
                .ok_or(RuntimeError::UnusableHashKey { kind: key_value.kind() })?;
            Ok(hash.get(&key).cloned().unwrap_or(Value::Null))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.kind() }),
    }
}
