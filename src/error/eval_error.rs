use crate::{ast::BinaryOperator, interpreter::value::number::Number};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while evaluating a syntax tree.
///
/// Each variant records the byte offset of the operator that failed.
pub enum EvalError {
    /// Attempted `/` with a zero divisor.
    #[error("Error at offset {offset}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// Attempted `%` with a zero divisor.
    #[error("Error at offset {offset}: Modulo by zero.")]
    ModuloByZero {
        /// Byte offset of the `%` operator.
        offset: usize,
    },
    /// Applied `%` to a floating-point operand.
    #[error("Error at offset {offset}: Modulo is only defined for integers, found {left} % {right}.")]
    ModuloOnFloat {
        /// The left operand.
        left:   Number,
        /// The right operand.
        right:  Number,
        /// Byte offset of the `%` operator.
        offset: usize,
    },
    /// The result does not fit the operand type.
    #[error("Error at offset {offset}: Overflow while computing '{op}'.")]
    Overflow {
        /// The operator that overflowed.
        op:     BinaryOperator,
        /// Byte offset of the operator.
        offset: usize,
    },
}

impl EvalError {
    /// Returns the byte offset of the operator that failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset }
            | Self::ModuloByZero { offset }
            | Self::ModuloOnFloat { offset, .. }
            | Self::Overflow { offset, .. } => *offset,
        }
    }
}
