/// Numeric values.
///
/// Defines the `Number` type shared by the scanner, the syntax tree and the
/// evaluator, together with the integer/float promotion rule used by every
/// binary operator.
pub mod number;
