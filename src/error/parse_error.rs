#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// A number or `(` was expected but something else was found.
    ///
    /// Raised for dangling operators (`2 +`), consecutive operators
    /// (`2 + * 3`), a leading minus sign (`-5`) and empty input.
    #[error("Error at offset {offset}: Expected value or '(' but found {found}.")]
    MissingOperand {
        /// The token found instead, rendered for display.
        found:  String,
        /// Byte offset of the offending token.
        offset: usize,
    },
    /// A `(` was never closed.
    #[error("Error at offset {offset}: Unmatched bracket, expected ')' but found {found}.")]
    UnmatchedBracket {
        /// The token found where `)` was expected.
        found:  String,
        /// Byte offset of the opening `(`.
        offset: usize,
    },
    /// Tokens remain after a complete expression.
    #[error("Error at offset {offset}: Extra tokens after expression, starting at {token}.")]
    TrailingInput {
        /// The first extra token.
        token:  String,
        /// Byte offset of the first extra token.
        offset: usize,
    },
    /// Parentheses are nested deeper than the configured limit.
    #[error("Error at offset {offset}: Brackets are nested more than {max} levels deep.")]
    NestingTooDeep {
        /// The configured maximum depth.
        max:    usize,
        /// Byte offset of the `(` that crossed the limit.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::MissingOperand { offset, .. }
            | Self::UnmatchedBracket { offset, .. }
            | Self::TrailingInput { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
