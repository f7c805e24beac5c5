use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_binary, parse_call, parse_index},
            unary::parse_prefix,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of each operator position, from loosest to tightest.
///
/// The derived `Ord` is what drives parsing decisions: an infix token only
/// takes over the expression parsed so far when its precedence is strictly
/// higher than the level the caller is parsing at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level; binds nothing.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// Call argument lists, introduced by `(`
    Call,
    /// Index brackets, introduced by `[`
    Index,
}

impl Precedence {
    /// The precedence a token has in infix position. Tokens that cannot
    /// continue an expression sit at [`Lowest`](Self::Lowest), which ends
    /// the loop in [`parse_expression`].
    #[must_use]
    pub const fn of(token: &Token) -> Self {
        match token {
            Token::EqualEqual | Token::BangEqual => Self::Equals,
            Token::Less | Token::Greater => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Asterisk | Token::Slash => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Parses an expression at the given precedence level.
///
/// This is the heart of the parser. A prefix parselet (dispatched on the
/// current token) produces the leftmost operand; the loop then repeatedly
/// lets infix parselets extend it for as long as the upcoming token binds
/// tighter than `precedence`. Passing each operator's own precedence into
/// the recursive call makes all binary operators left-associative.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `precedence`: The level the caller is parsing at; use
///   [`Precedence::Lowest`] for a full expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               precedence: Precedence)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_prefix(tokens)?;

    while let Some((token, _)) = tokens.peek() {
        if precedence >= Precedence::of(token) {
            break;
        }

        left = match token {
            Token::LParen => parse_call(tokens, left)?,
            Token::LBracket => parse_index(tokens, left)?,
            _ => parse_binary(tokens, left)?,
        };
    }

    Ok(left)
}
