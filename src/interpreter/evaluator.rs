/// Core evaluation logic.
///
/// Contains the post-order tree walk and the evaluator's result type.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies the five arithmetic operators to a pair of numbers, including the
/// integer/float promotion rule and every failure check.
pub mod binary;
