/// Entry points and shared parser state.
///
/// Declares the parse result type, the nesting guard, and the top-level
/// `parse` function that rejects leftover input.
pub mod core;
/// Binary operator parsing.
///
/// Implements the two precedence levels as mutually recursive rules: additive
/// (`+`, `-`) over multiplicative (`*`, `/`, `%`).
pub mod binary;
/// Primary expression parsing.
///
/// Numbers and parenthesized sub-expressions, the operands of every binary
/// operator.
pub mod primary;
/// The token cursor consumed by the parser.
pub mod stream;
