use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{evaluator::binary::eval_binary, value::number::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a syntax tree to a single number.
///
/// The walk is post-order: both children of an operator are evaluated, left
/// first, before the operator itself is applied. It keeps its own stack of
/// unfinished operators instead of recursing, so the depth of the tree is
/// bounded by memory rather than by the thread's stack. The tree is only
/// borrowed, so it can be evaluated again or dropped afterwards.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Returns
/// The computed [`Number`].
///
/// # Errors
/// Returns the first `EvalError` raised by an operator, in evaluation order.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::evaluate, value::number::Number},
/// };
///
/// let seven = Expr::literal(Number::Integer(7), 0);
/// let two = Expr::literal(Number::Integer(2), 4);
/// let expr = Expr::binary(seven, BinaryOperator::Div, two, 2);
///
/// assert_eq!(evaluate(&expr).unwrap(), Number::Integer(3));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    let mut pending = Vec::new();
    let mut node = expr;

    loop {
        // Walk down the left spine, remembering each operator on the way.
        let mut value = loop {
            match node {
                Expr::Literal { value, .. } => break *value,
                Expr::BinaryOp { left,
                                 op,
                                 right,
                                 offset, } => {
                    pending.push(Pending::Right { op:     *op,
                                                  offset: *offset,
                                                  right:  &**right, });
                    node = &**left;
                },
            }
        };

        // Climb back up until an operator still needs its right operand.
        loop {
            match pending.pop() {
                None => return Ok(value),
                Some(Pending::Right { op, offset, right }) => {
                    pending.push(Pending::Apply { op,
                                                  offset,
                                                  left: value });
                    node = right;
                    break;
                },
                Some(Pending::Apply { op, offset, left }) => {
                    let result = eval_binary(op, left, value, offset)?;
                    trace!(%left, %op, right = %value, %result, "reduced operator");
                    value = result;
                },
            }
        }
    }
}

/// An operator whose evaluation is still in progress.
enum Pending<'a> {
    /// The left operand is being evaluated; `right` comes next.
    Right {
        op:     BinaryOperator,
        offset: usize,
        right:  &'a Expr,
    },
    /// Both operands are known once the current value is finished.
    Apply {
        op:     BinaryOperator,
        offset: usize,
        left:   Number,
    },
}
