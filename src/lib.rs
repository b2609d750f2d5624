//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It scans, parses, and evaluates expressions made of integers, floats,
//! named variables, the operators `+ - * / %` and parentheses, with standard
//! precedence and explicit integer/float promotion.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, ScanError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::scan,
        limits::Limits,
        parser::{core::parse, stream::TokenStream},
        value::number::Number,
        variables::Variables,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a strict binary tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the leaf and operator node types.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Renders trees for diagnostics.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. Every error is a value returned to the caller; nothing in the
/// pipeline terminates the process.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches source offsets and offending input for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the scan, parse and evaluate pipeline.
///
/// This module ties together lexing, parsing, evaluation, the numeric value
/// type and the variable table.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the stage-level entry points used by the functions below.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an expression with the default [`Limits`].
///
/// Identifiers in `source` are replaced by their values from `variables`
/// while scanning. The call is pure: evaluating the same text against the
/// same table always yields the same result.
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{
///     evaluate_expression,
///     interpreter::{value::number::Number, variables::Variables},
/// };
///
/// let mut variables = Variables::new();
/// variables.insert("x", Number::Integer(3));
///
/// let result = evaluate_expression("x * (x + 1)", &variables);
/// assert_eq!(result.unwrap(), Number::Integer(12));
///
/// // Division by zero is reported, not trapped.
/// assert!(evaluate_expression("5 / 0", &variables).is_err());
/// ```
pub fn evaluate_expression(source: &str, variables: &Variables) -> Result<Number, Error> {
    evaluate_expression_with(source, variables, &Limits::default())
}

/// Evaluates an expression with explicit resource [`Limits`].
///
/// # Errors
/// Returns an error if the input exceeds `limits`, or if scanning, parsing or
/// evaluation fails.
pub fn evaluate_expression_with(source: &str,
                                variables: &Variables,
                                limits: &Limits)
                                -> Result<Number, Error> {
    let expr = parse_source(source, variables, limits)?;
    let value = evaluate(&expr)?;

    debug!(%value, "evaluated expression");
    Ok(value)
}

/// Scans and parses `source` without evaluating it.
///
/// Useful for inspecting the tree an expression produces.
///
/// # Errors
/// Returns an error if the input exceeds `limits`, or if scanning or parsing
/// fails.
///
/// # Examples
/// ```
/// use reckon::{interpreter::{limits::Limits, variables::Variables}, parse_source};
///
/// let expr = parse_source("10 - 3 - 2", &Variables::new(), &Limits::default()).unwrap();
/// assert_eq!(expr.to_string(), "((10 - 3) - 2)");
/// ```
pub fn parse_source(source: &str, variables: &Variables, limits: &Limits) -> Result<Expr, Error> {
    if source.len() > limits.max_input_len {
        return Err(ScanError::InputTooLong { len: source.len(),
                                             max: limits.max_input_len, }.into());
    }

    let tokens = scan(source, variables)?;
    let mut stream = TokenStream::new(tokens, source.len());

    Ok(parse(&mut stream, limits)?)
}
