use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an evaluated operand.
///
/// - `!` negates the operand's truthiness and always yields a boolean, so
///   `!!x` is `x` reduced to a boolean.
/// - `-` negates integers; any other operand kind is an unknown-operator
///   error. Negation wraps on `i64::MIN`.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `operand`: The evaluated operand.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use minima::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let negated = eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let truthy = eval_unary(UnaryOperator::Not, &Value::Integer(0)).unwrap();
/// assert_eq!(truthy, Value::Bool(false));
/// ```
pub fn eval_unary(op: UnaryOperator, operand: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOperator::Negate => match operand {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            other => Err(RuntimeError::UnknownUnaryOperator { op,
                                                              operand: other.kind(), }),
        },
    }
}
