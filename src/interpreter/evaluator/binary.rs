use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
};

/// Applies an infix operator to two evaluated operands.
///
/// Dispatch order decides which rule wins:
///
/// 1. Two integers: full arithmetic and comparison.
/// 2. Two strings: `+` concatenates; every other operator (equality
///    included) is an unknown-operator error.
/// 3. `==` / `!=`: identity comparison. Booleans and nulls compare by
///    value; shared aggregates compare by identity, so two separately
///    built arrays are never equal; mixed kinds are simply unequal.
/// 4. Remaining mixed-kind pairs: type mismatch.
/// 5. Remaining same-kind pairs: unknown operator.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Evaluated left operand.
/// - `right`: Evaluated right operand.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use minima::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(2), &Value::Integer(3)).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let greeting =
///     eval_binary(BinaryOperator::Add, &Value::from("Hello, "), &Value::from("World!")).unwrap();
/// assert_eq!(greeting, Value::from("Hello, World!"));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_binary(op, l, r),
        _ => match op {
            BinaryOperator::Equal => Ok(Value::Bool(identical(left, right))),
            BinaryOperator::NotEqual => Ok(Value::Bool(!identical(left, right))),
            _ if left.kind() != right.kind() => Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                                                 op,
                                                                                 right:
                                                                                     right.kind(), }),
            _ => Err(RuntimeError::UnknownBinaryOperator { left: left.kind(),
                                                           op,
                                                           right: right.kind(), }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps two's-complement instead of panicking; division by
/// zero is the one arithmetic runtime error.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match op {
        BinaryOperator::Add => Value::Integer(left.wrapping_add(right)),
        BinaryOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        BinaryOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        BinaryOperator::Less => Value::Bool(left < right),
        BinaryOperator::Greater => Value::Bool(left > right),
        BinaryOperator::Equal => Value::Bool(left == right),
        BinaryOperator::NotEqual => Value::Bool(left != right),
    };
    Ok(value)
}

/// String operations. Concatenation is the only one; everything else on a
/// pair of strings is an unknown operator.
fn eval_string_binary(op: BinaryOperator, left: &Rc<String>, right: &Rc<String>) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => {
            let mut combined = String::with_capacity(left.len() + right.len());
            combined.push_str(left);
            combined.push_str(right);
            Ok(Value::from(combined))
        },
        _ => Err(RuntimeError::UnknownBinaryOperator { left: ValueKind::Str,
                                                       op,
                                                       right: ValueKind::Str, }),
    }
}

/// Identity comparison backing `==` and `!=` outside the integer and
/// string rules. Booleans and nulls are canonical values, so they compare
/// by content; aggregates compare by shared identity.
fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Hash(l), Value::Hash(r)) => Rc::ptr_eq(l, r),
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        (Value::Builtin(l), Value::Builtin(r)) => l.name == r.name,
        _ => false,
    }
}
