use std::iter::Peekable;

use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a whole program from a token stream.
///
/// Parsing is non-fatal: when a statement fails, its error is recorded and
/// the parser skips ahead to just past the next `;` (or to the end of
/// input) before trying the next statement. The returned program contains
/// every statement that did parse.
///
/// # Parameters
/// - `tokens`: The full `(Token, line)` stream of a source text.
///
/// # Returns
/// The parsed [`Program`] together with all collected parse errors. An
/// empty error list means the whole input was consumed cleanly.
///
/// # Example
/// ```
/// use minima::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let (program, errors) = parse_program(&tokenize("let x = 1; let y = x + 2;"));
///
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
#[must_use]
pub fn parse_program(tokens: &[(Token, usize)]) -> (Program, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut program = Program::default();
    let mut errors = Vec::new();

    while iter.peek().is_some() {
        match parse_statement(&mut iter) {
            Ok(statement) => program.statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(&mut iter);
            },
        }
    }

    (program, errors)
}

/// Skips tokens up to and including the next `;`, the boundary where a
/// fresh statement can plausibly start.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    for (token, _) in tokens.by_ref() {
        if *token == Token::Semicolon {
            break;
        }
    }
}

/// Parses a single statement.
///
/// A statement is one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// The leading token decides; anything that is not `let` or `return` is
/// parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_let_statement(tokens),
        Some((Token::Return, _)) => parse_return_statement(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses a binding of the form `let <identifier> = <expression>;`.
///
/// Both the `=` and the terminating `;` are required; only at the very end
/// of input may the semicolon be omitted.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign, "'=' after the binding name")?;
    let value = parse_expression(tokens, Precedence::Lowest)?;
    expect_semicolon(tokens)?;

    Ok(Statement::Let { name, value, line })
}

/// Parses a statement of the form `return <expression>;`.
///
/// The semicolon rule matches `let`: required, except at end of input.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    let value = parse_expression(tokens, Precedence::Lowest)?;
    expect_semicolon(tokens)?;

    Ok(Statement::Return { value, line })
}

/// Parses an expression in statement position.
///
/// A trailing semicolon is optional and consumed when present, which is
/// what lets the final expression of a block or program stand on its own.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens, Precedence::Lowest)?;

    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(Statement::Expression { expr, line })
}

/// Consumes a required `;`, tolerating its absence only at end of input.
fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Semicolon, _)) | None => Ok(()),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: "';'".to_string(),
                                                               found:    format!("{tok:?}"),
                                                               line:     *line, }),
    }
}
