use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a binary operator applied to an already parsed left operand.
///
/// The operator's own precedence is passed to the recursive call for the
/// right operand, which makes all binary operators left-associative:
/// `a - b - c` parses as `((a - b) - c)`.
///
/// Only called by the precedence loop, which guarantees the current token
/// is one of the binary operator tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator.
/// - `left`: The expression parsed so far.
///
/// # Returns
/// An [`Expr::Infix`] node combining both operands.
pub(in crate::interpreter::parser) fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                                                          left: Expr)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next().unwrap();
    let precedence = Precedence::of(token);
    let op = match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Asterisk => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Less => BinaryOperator::Less,
        Token::Greater => BinaryOperator::Greater,
        Token::EqualEqual => BinaryOperator::Equal,
        Token::BangEqual => BinaryOperator::NotEqual,
        _ => unreachable!(),
    };

    let right = parse_expression(tokens, precedence)?;
    Ok(Expr::Infix { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: *line })
}

/// Parses a call argument list applied to an already parsed callee.
///
/// `(` binds tighter than every binary operator, so `add(1, 2) * 3`
/// parses the call first. The callee may be any expression; evaluation
/// decides whether it is actually callable.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `function`: The callee expression.
///
/// # Returns
/// An [`Expr::Call`] node.
pub(in crate::interpreter::parser) fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                                                        function: Expr)
                                                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, Precedence::Lowest),
                                          &Token::RParen)?;
    Ok(Expr::Call { function: Box::new(function),
                    arguments,
                    line: *line })
}

/// Parses an index expression applied to an already parsed operand.
///
/// The index itself is parsed at the lowest level, so arbitrary
/// expressions are valid between the brackets: `values[1 + 1]`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
/// - `left`: The expression being indexed.
///
/// # Returns
/// An [`Expr::Index`] node.
pub(in crate::interpreter::parser) fn parse_index<'a, I>(tokens: &mut Peekable<I>,
                                                         left: Expr)
                                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let index = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RBracket, "']' after index")?;
    Ok(Expr::Index { left:  Box::new(left),
                     index: Box::new(index),
                     line:  *line, })
}
