#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while scanning source text.
pub enum ScanError {
    /// Found a character that is not a digit, letter, whitespace or one of
    /// `+-*/%()`.
    #[error("Error at offset {offset}: Cannot tokenize character '{ch}'.")]
    UnknownChar {
        /// The offending character.
        ch:     char,
        /// Byte offset of the character in the source.
        offset: usize,
    },
    /// An identifier was not found in the variable table.
    #[error("Error at offset {offset}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The identifier as written in the source.
        name:   String,
        /// Byte offset of the identifier in the source.
        offset: usize,
    },
    /// A run of digits and dots could not be read as a number.
    #[error("Error at offset {offset}: Malformed number literal '{literal}'.")]
    MalformedNumber {
        /// The literal as written in the source.
        literal: String,
        /// Byte offset of the literal in the source.
        offset:  usize,
    },
    /// The source text exceeds the configured input length.
    #[error("Error at offset 0: Input is {len} bytes long, the limit is {max}.")]
    InputTooLong {
        /// Length of the rejected input in bytes.
        len: usize,
        /// The configured maximum.
        max: usize,
    },
}

impl ScanError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownChar { offset, .. }
            | Self::UnknownVariable { offset, .. }
            | Self::MalformedNumber { offset, .. } => *offset,
            Self::InputTooLong { .. } => 0,
        }
    }
}
