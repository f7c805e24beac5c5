use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses the prefix position of an expression.
///
/// Every expression starts here. The leading token selects the parselet:
///
/// - literals (integer, string, boolean)
/// - identifiers
/// - prefix operators `!` and `-`
/// - `(` grouped expressions
/// - `if` conditionals
/// - `fn` function literals
/// - `[` array literals
/// - `{` hash literals
///
/// Infix continuations (operators, calls, indexing) are not handled here;
/// the caller's precedence loop folds those in afterwards.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed prefix expression, or a `ParseError` if no expression can
/// start with the current token.
pub(crate) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Integer(_), _) => parse_integer_literal(tokens),
        (Token::Str(_), _) => parse_string_literal(tokens),
        (Token::True | Token::False, _) => parse_boolean_literal(tokens),
        (Token::Identifier(_), _) => parse_identifier_expression(tokens),
        (Token::Bang | Token::Minus, _) => parse_unary(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::If, _) => parse_if_expression(tokens),
        (Token::Function, _) => parse_function_literal(tokens),
        (Token::LBracket, _) => parse_array_literal(tokens),
        (Token::LBrace, _) => parse_hash_literal(tokens),
        (Token::Illegal(literal), line) => {
            Err(ParseError::IllegalToken { literal: literal.clone(),
                                           line:    *line, })
        },
        (tok, line) => Err(ParseError::NoPrefixRule { token: format!("{tok:?}"),
                                                      line:  *line, }),
    }
}

/// Parses a prefix operator expression.
///
/// Supports:
/// - `-`  (integer negation)
/// - `!`  (logical not)
///
/// The operand is parsed at prefix precedence, so prefix operators are
/// right-associative and bind tighter than any binary operator: `!-x`
/// parses as `(!(-x))` and `-a * b` as `((-a) * b)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `!` or `-`.
///
/// # Returns
/// An [`Expr::Prefix`] node.
fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next().unwrap();
    let op = match token {
        Token::Bang => UnaryOperator::Not,
        Token::Minus => UnaryOperator::Negate,
        _ => unreachable!(),
    };

    let right = parse_expression(tokens, Precedence::Prefix)?;
    Ok(Expr::Prefix { op,
                      right: Box::new(right),
                      line: *line })
}

/// Parses an integer literal.
///
/// The lexer hands over raw digit strings; the conversion to `i64` happens
/// here so that a literal that does not fit is reported as a parse error
/// rather than a panic or silent truncation.
fn parse_integer_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(literal), line)) => match literal.parse::<i64>() {
            Ok(value) => Ok(Expr::IntegerLiteral { value, line: *line }),
            Err(_) => Err(ParseError::InvalidInteger { literal: literal.clone(),
                                                       line:    *line, }),
        },
        _ => unreachable!(),
    }
}

/// Parses a string literal. The token already carries the unquoted content.
fn parse_string_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Str(value), line)) => Ok(Expr::StringLiteral { value: value.clone(),
                                                                    line:  *line, }),
        _ => unreachable!(),
    }
}

/// Parses `true` or `false`.
fn parse_boolean_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::True, line)) => Ok(Expr::BooleanLiteral { value: true,
                                                               line:  *line, }),
        Some((Token::False, line)) => Ok(Expr::BooleanLiteral { value: false,
                                                                line:  *line, }),
        _ => unreachable!(),
    }
}

/// Parses an identifier in expression position.
///
/// Whether the name resolves to anything is the evaluator's concern; calls
/// are not special-cased here because `(` is an infix parselet and the
/// callee may be any expression.
fn parse_identifier_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                       line: *line, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// Grouping produces no AST node of its own; the parentheses only reset the
/// precedence level for the enclosed expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(expr)
}

/// Parses an `if` expression.
///
/// Syntax:
/// ```text
///     if (<condition>) { <consequence> }
///     if (<condition>) { <consequence> } else { <alternative> }
/// ```
/// Both the parentheses around the condition and the braces around the
/// branches are required. The whole construct is an expression; a missing
/// alternative makes the expression evaluate to `null` when the condition
/// is false.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `if`.
///
/// # Returns
/// An [`Expr::If`] node.
fn parse_if_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen, "')' after if condition")?;

    let brace_line = expect_token(tokens, &Token::LBrace, "'{' to open the consequence")?;
    let consequence = parse_block(tokens, brace_line)?;

    let alternative = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        let brace_line = expect_token(tokens, &Token::LBrace, "'{' to open the alternative")?;
        Some(parse_block(tokens, brace_line)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Parses a function literal of the form `fn(param1, param2, ...) { body }`.
///
/// The parameter list may be empty; parameters are plain identifiers
/// separated by commas. The body is a brace-delimited block.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `fn`.
///
/// # Returns
/// An [`Expr::FunctionLiteral`] node.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    expect_token(tokens, &Token::LParen, "'(' after 'fn'")?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let brace_line = expect_token(tokens, &Token::LBrace, "'{' to open the function body")?;
    let body = parse_block(tokens, brace_line)?;

    Ok(Expr::FunctionLiteral { parameters,
                               body,
                               line })
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
///
/// Elements are full expressions separated by commas; `[]` is the empty
/// array.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let elements = parse_comma_separated(tokens,
                                         |tokens| parse_expression(tokens, Precedence::Lowest),
                                         &Token::RBracket)?;
    Ok(Expr::ArrayLiteral { elements,
                            line: *line })
}

/// Parses a hash literal of the form `{key1: value1, key2: value2, ...}`.
///
/// Keys and values are full expressions; `{}` is the empty hash. Pairs keep
/// their source order in the AST. Whether a key is actually hashable is
/// checked at evaluation time.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `{`.
///
/// # Returns
/// An [`Expr::HashLiteral`] node.
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let pairs = parse_comma_separated(tokens,
                                      |tokens| {
                                          let key = parse_expression(tokens, Precedence::Lowest)?;
                                          expect_token(tokens,
                                                       &Token::Colon,
                                                       "':' between hash key and value")?;
                                          let value = parse_expression(tokens, Precedence::Lowest)?;
                                          Ok((key, value))
                                      },
                                      &Token::RBrace)?;
    Ok(Expr::HashLiteral { pairs,
                           line: *line })
}
