use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        value::number::{Number, Operands},
    },
};

/// Evaluates a binary operation between two numbers.
///
/// Both operands are first promoted to a common representation: two integers
/// stay integers, anything else becomes two floats. `%` is the exception and
/// is only defined for integers.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Source offset of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Number>` containing the evaluated result.
///
/// # Errors
/// - `ModuloOnFloat` if `%` sees a float operand.
/// - `DivisionByZero` / `ModuloByZero` for a zero divisor.
/// - `Overflow` if the result does not fit the operand type.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::number::Number},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, Number::Integer(1), Number::Float(2.5), 0);
/// assert_eq!(result.unwrap(), Number::Float(3.5));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   offset: usize)
                   -> EvalResult<Number> {
    match left.promote(right) {
        Operands::Integers(a, b) => eval_integer_op(op, a, b, offset).map(Number::Integer),
        // Report the operands as written, before promotion.
        Operands::Floats(..) if op == BinaryOperator::Mod => {
            Err(EvalError::ModuloOnFloat { left,
                                           right,
                                           offset })
        },
        Operands::Floats(a, b) => eval_float_op(op, a, b, offset).map(Number::Float),
    }
}

/// Evaluates an operator over two integers.
///
/// Division truncates toward zero and the remainder takes the sign of the
/// dividend. Every operation is checked, so overflow is reported rather than
/// wrapped.
fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, offset: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let overflow = EvalError::Overflow { op, offset };

    match op {
        Add => a.checked_add(b).ok_or(overflow),
        Sub => a.checked_sub(b).ok_or(overflow),
        Mul => a.checked_mul(b).ok_or(overflow),
        Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero { offset });
            }
            a.checked_div(b).ok_or(overflow)
        },
        Mod => {
            if b == 0 {
                return Err(EvalError::ModuloByZero { offset });
            }
            // `i64::MIN % -1` is mathematically 0; only the machine op traps.
            Ok(a.wrapping_rem(b))
        },
    }
}

/// Evaluates an operator over two floats.
///
/// A zero divisor is an error rather than an infinity, and a finite pair of
/// operands that produces an infinite result is reported as overflow.
fn eval_float_op(op: BinaryOperator, a: f64, b: f64, offset: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { offset });
            }
            a / b
        },
        Mod => {
            return Err(EvalError::ModuloOnFloat { left:  Number::Float(a),
                                                  right: Number::Float(b),
                                                  offset });
        },
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::Overflow { op, offset })
    }
}
