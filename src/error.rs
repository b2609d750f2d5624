/// Scanning errors.
///
/// Defines the errors raised while turning source text into tokens: characters
/// outside the expression alphabet, identifiers missing from the variable
/// table, malformed numeric literals and oversized input.
pub mod scan_error;
/// Parsing errors.
///
/// Defines all errors that can occur while building the syntax tree from a
/// token stream. Parse errors include missing operands, unbalanced brackets,
/// leftover input and runaway nesting.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a syntax tree to
/// a number, such as division by zero or integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use scan_error::ScanError;

/// Any failure of the scan, parse and evaluate pipeline.
///
/// Every phase reports its own error type; this enum lets a caller handle all
/// of them through a single `Result` while still matching on the phase.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The token sequence does not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but cannot be computed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the byte offset in the source text the error points at.
    ///
    /// Errors that are not tied to a single position (such as input that is
    /// too long) point at the start of the input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Scan(e) => e.offset(),
            Self::Parse(e) => e.offset(),
            Self::Eval(e) => e.offset(),
        }
    }
}
