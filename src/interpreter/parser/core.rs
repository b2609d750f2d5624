use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        limits::Limits,
        parser::{binary::parse_additive, stream::TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tracks how many parentheses enclose the rule being parsed.
///
/// The guard is passed down by value; entering a group produces a deeper copy
/// and fails once the configured maximum is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    depth: usize,
    max:   usize,
}

impl Nesting {
    /// Starts at depth zero with the given maximum.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { depth: 0,
               max }
    }

    /// Returns the guard for the inside of a group opened at `offset`.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if the new depth exceeds the
    /// maximum.
    pub const fn enter(self, offset: usize) -> ParseResult<Self> {
        if self.depth >= self.max {
            return Err(ParseError::NestingTooDeep { max: self.max,
                                                    offset });
        }
        Ok(Self { depth: self.depth + 1,
                  max:   self.max, })
    }
}

/// Parses a complete expression and requires the stream to be exhausted.
///
/// Grammar:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/" | "%") factor)*
///     factor     := number | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the input.
/// - `limits`: Bounds applied while parsing; only `max_depth` is used here.
///
/// # Returns
/// The root of the syntax tree.
///
/// # Errors
/// - `MissingOperand` if a number or `(` is missing.
/// - `UnmatchedBracket` if a `(` is never closed.
/// - `TrailingInput` if tokens remain after the expression.
/// - `NestingTooDeep` if parentheses nest beyond `limits.max_depth`.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     lexer::scan,
///     limits::Limits,
///     parser::{core::parse, stream::TokenStream},
///     variables::Variables,
/// };
///
/// let source = "2 + 3 * 4";
/// let tokens = scan(source, &Variables::new()).unwrap();
/// let mut stream = TokenStream::new(tokens, source.len());
///
/// let expr = parse(&mut stream, &Limits::default()).unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(tokens: &mut TokenStream, limits: &Limits) -> ParseResult<Expr> {
    let expr = parse_expression(tokens, Nesting::new(limits.max_depth))?;

    if tokens.is_at_end() {
        debug!(nodes = expr.node_count(), depth = expr.depth(), tree = %expr, "parsed expression");
        Ok(expr)
    } else {
        Err(ParseError::TrailingInput { token:  tokens.peek_token().to_string(),
                                        offset: tokens.offset(), })
    }
}

/// Parses an expression at the lowest precedence level.
///
/// This is the rule re-entered for every parenthesized group; it stops at the
/// first token that cannot continue the expression and leaves it unconsumed.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `nesting`: Nesting guard for the enclosing group.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream, nesting: Nesting) -> ParseResult<Expr> {
    parse_additive(tokens, nesting)
}
