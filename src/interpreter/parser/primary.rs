use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Nesting, ParseResult, parse_expression},
            stream::TokenStream,
        },
    },
};

/// Parses a factor: a number or a parenthesized expression.
///
/// Grammar:
/// ```text
///     factor := number
///             | "(" expression ")"
/// ```
/// Anything else in operand position is a missing operand. This covers a
/// dangling operator at the end of input, two operators in a row, a leading
/// `-` (there is no unary minus), a stray `)` and empty input.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a factor.
/// - `nesting`: Nesting guard for the enclosing group.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
pub fn parse_factor(tokens: &mut TokenStream, nesting: Nesting) -> ParseResult<Expr> {
    match tokens.peek() {
        TokenKind::Number => parse_literal(tokens),
        TokenKind::OpenParen => parse_grouping(tokens, nesting),
        _ => Err(ParseError::MissingOperand { found:  tokens.peek_token().to_string(),
                                              offset: tokens.offset(), }),
    }
}

/// Parses a numeric literal into a leaf node.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a number.
///
/// # Returns
/// An [`Expr::Literal`] containing the value.
fn parse_literal(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.next_spanned() {
        (Token::Number(value), offset) => Ok(Expr::literal(value, offset)),
        (token, offset) => Err(ParseError::MissingOperand { found: token.to_string(),
                                                            offset }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression one nesting level deeper, and then requires a closing `)`.
/// Failure to find it yields `ParseError::UnmatchedBracket` pointing at the
/// opening parenthesis.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
/// - `nesting`: Nesting guard for the enclosing group.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &mut TokenStream, nesting: Nesting) -> ParseResult<Expr> {
    let (_, offset) = tokens.next_spanned();
    let expr = parse_expression(tokens, nesting.enter(offset)?)?;
    match tokens.next() {
        Token::CloseParen => Ok(expr),
        token => Err(ParseError::UnmatchedBracket { found: token.to_string(),
                                                    offset }),
    }
}
