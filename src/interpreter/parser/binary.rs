use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Nesting, ParseResult},
            primary::parse_factor,
            stream::TokenStream,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each new operand
/// becomes the right child of a node whose left child is everything parsed so
/// far, so `10 - 3 - 2` reads as `(10 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `nesting`: Nesting guard for the enclosing group.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenStream, nesting: Nesting) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens, nesting)?;
    while let Some(op) = token_to_binary_operator(tokens.peek_token())
          && op.is_additive()
    {
        let (_, offset) = tokens.next_spanned();
        let right = parse_multiplicative(tokens, nesting)?;
        trace!(%op, offset, "folding additive operator");
        left = Expr::binary(left, op, right, offset);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `nesting`: Nesting guard for the enclosing group.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream, nesting: Nesting) -> ParseResult<Expr> {
    let mut left = parse_factor(tokens, nesting)?;
    while let Some(op) = token_to_binary_operator(tokens.peek_token())
          && op.is_multiplicative()
    {
        let (_, offset) = tokens.next_spanned();
        let right = parse_factor(tokens, nesting)?;
        trace!(%op, offset, "folding multiplicative operator");
        left = Expr::binary(left, op, right, offset);
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers, brackets and the end-of-input sentinel.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// let plus = Token::Operator(BinaryOperator::Add.into());
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::OpenParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Operator(op) => Some(op.kind),
        _ => None,
    }
}
