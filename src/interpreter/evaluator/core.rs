use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, function, index::eval_index, unary::eval_unary},
        value::{
            core::{FunctionValue, Value},
            environment::Env,
            hash_key::{HashKey, HashValue},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The first error wins: `?`
/// carries it outward unchanged through every enclosing construct.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program in the given environment.
///
/// Statements run in order. A `return` encountered anywhere unwraps at
/// this boundary: its inner value becomes the program result and the
/// remaining statements do not run. The result is `None` when the program
/// is empty or ends in a statement that produces no value (a `let`
/// binding).
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The environment to evaluate in; top-level `let` bindings land
///   here and survive the call, which is what gives a session its memory.
///
/// # Returns
/// The value of the final statement, if any.
///
/// # Example
/// ```
/// use minima::{
///     interpreter::{
///         evaluator::core::eval_program,
///         lexer::tokenize,
///         parser::statement::parse_program,
///         value::{core::Value, environment::Env},
///     },
/// };
///
/// let (program, errors) = parse_program(&tokenize("let a = 2; a * 3"));
/// assert!(errors.is_empty());
///
/// let env = Env::new();
/// let result = eval_program(&program, &env).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(6)));
/// assert_eq!(env.get("a"), Some(Value::Integer(2)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(inner)) => return Ok(Some(*inner)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// - `let` evaluates its value and binds it in the innermost frame; the
///   statement itself produces no value.
/// - `return` evaluates its value and wraps it in [`Value::Return`], which
///   enclosing blocks pass along untouched.
/// - An expression statement produces the expression's value.
///
/// # Parameters
/// - `statement`: Statement to evaluate.
/// - `env`: The current environment.
///
/// # Returns
/// `Some(Value)` for statements that yield a result, or `None` when no
/// value is produced.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expr, .. } => Ok(Some(eval_expression(expr, env)?)),
    }
}

/// Evaluates the statements of a block in order.
///
/// A [`Value::Return`] produced by any statement ends the block and is
/// handed back still wrapped. Not unwrapping here is deliberate: it lets a
/// `return` escape arbitrarily nested blocks until a function call or the
/// program boundary unwraps it.
///
/// Blocks do not open a scope; bindings made inside them land in the
/// current frame.
///
/// # Parameters
/// - `block`: The block to evaluate.
/// - `env`: The current environment.
///
/// # Returns
/// The value of the last executed statement, or `None` for an empty block.
pub fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Some(Value::Return(_))) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch of the evaluator: literals map directly to
/// values, identifiers resolve through the environment and then the
/// builtin table, operator nodes evaluate their operands depth-first and
/// left-to-right, and the composite forms delegate to their modules.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The current environment.
///
/// # Returns
/// The computed value, or the first error any subexpression raised.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::from(value.as_str())),
        Expr::Identifier { name, .. } => eval_identifier(name, env),
        Expr::Prefix { op, right, .. } => {
            let operand = eval_expression(right, env)?;
            eval_unary(*op, &operand)
        },
        Expr::Infix { left, op, right, .. } => {
            let lhs = eval_expression(left, env)?;
            let rhs = eval_expression(right, env)?;
            eval_binary(*op, &lhs, &rhs)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => {
            let condition = eval_expression(condition, env)?;
            let branch = if condition.is_truthy() {
                eval_block(consequence, env)?
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)?
            } else {
                None
            };
            Ok(branch.unwrap_or(Value::Null))
        },
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        env.clone(), })))
        },
        Expr::Call { function, arguments, .. } => function::core::eval_call(function,
                                                                            arguments,
                                                                            env),
        Expr::ArrayLiteral { elements, .. } => {
            let mut values = Vec::with_capacity(elements.len());
            for element in elements {
                values.push(eval_expression(element, env)?);
            }
            Ok(Value::Array(Rc::new(values)))
        },
        Expr::Index { left, index, .. } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index(&left, &index)
        },
        Expr::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
    }
}

/// Resolves an identifier.
///
/// The environment chain is consulted first, then the builtin table; a
/// name found in neither is a runtime error. Bindings therefore shadow
/// builtins.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = function::core::lookup_builtin(name) {
        return Ok(builtin);
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates a hash literal.
///
/// For each pair the key is evaluated first, then the value, in source
/// order. A key that is not hashable stops evaluation. Duplicate keys keep
/// their first position but take the value of the last pair.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
    let mut hash = HashValue::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key_value = eval_expression(key_expr, env)?;
        let key = HashKey::of(&key_value)
            .ok_or(RuntimeError::UnusableHashKey { kind: key_value.kind() })?;
        let value = eval_expression(value_expr, env)?;
        hash.insert(key, key_value, value);
    }

    Ok(Value::Hash(Rc::new(hash)))
}
