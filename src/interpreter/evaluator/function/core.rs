use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, eval_block, eval_expression},
            function::builtin,
        },
        value::{
            core::{Builtin, FunctionValue, Value},
            environment::Env,
        },
    },
};

/// Defines the builtin functions by generating a lookup table and a name
/// list.
///
/// Each entry maps a string name to the native function implementing it.
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ( $( $name:literal => $func:path ),* $(,)? ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $( Builtin { name: $name, func: $func }, )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => builtin::len,
    "first" => builtin::first,
    "last"  => builtin::last,
    "rest"  => builtin::rest,
    "push"  => builtin::push,
    "puts"  => builtin::puts,
}

/// Looks a name up in the builtin table.
///
/// Used by identifier resolution after the environment chain comes up
/// empty, so user bindings shadow builtins.
///
/// # Returns
/// The builtin as a first-class [`Value`], or `None` for unknown names.
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| Value::Builtin(*builtin))
}

/// Evaluates a call expression.
///
/// The callee is evaluated first, then each argument from left to right;
/// the first error among them aborts the call before anything is invoked.
/// The evaluated callee decides what happens next: user-defined functions
/// are applied via [`apply_function`], builtins receive the argument list
/// directly, and anything else is not callable.
///
/// # Parameters
/// - `function`: Expression producing the callee.
/// - `arguments`: Argument expressions.
/// - `env`: The caller's environment.
///
/// # Returns
/// The call's result value.
pub fn eval_call(function: &Expr, arguments: &[Expr], env: &Env) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    match callee {
        Value::Function(function) => apply_function(&function, args),
        Value::Builtin(builtin) => (builtin.func)(args),
        other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
    }
}

/// Applies a user-defined function to evaluated arguments.
///
/// A fresh frame enclosed by the function's captured environment receives
/// the parameter bindings; the caller's environment plays no part, which
/// is precisely lexical scoping. Parameters bind positionally: extra
/// arguments are dropped and parameters without arguments stay unbound.
///
/// The body's `Return` wrapper, if any, is unwrapped exactly once here, so
/// a `return` ends the callee but never the caller.
fn apply_function(function: &FunctionValue, args: Vec<Value>) -> EvalResult<Value> {
    let scope = Env::enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(args) {
        scope.set(parameter.clone(), argument);
    }

    let result = eval_block(&function.body, &scope)?;
    Ok(match result {
        Some(Value::Return(inner)) => *inner,
        Some(value) => value,
        None => Value::Null,
    })
}

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
///
/// ## Example
/// ```
/// use minima::interpreter::{evaluator::function::core::check_arity, value::core::Value};
///
/// let args = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity(&args, 2).is_ok());
/// assert!(check_arity(&args, 1).is_err());
/// ```
pub const fn check_arity<T>(args: &[T], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want })
    }
}
