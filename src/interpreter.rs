/// The evaluator module reduces syntax trees to numbers.
///
/// The evaluator walks the AST post-order and applies each operator to the
/// values of its children, promoting integers to floats where needed. It is
/// the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the five arithmetic operations.
/// - Applies the integer/float promotion rule.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces the complete
/// sequence of tokens: numbers, operators and brackets. Identifiers are
/// resolved against the variable table here, so later stages only see
/// numbers. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Parses integer and floating-point literals.
/// - Reports lexical errors for invalid characters, unknown variables and
///   malformed literals.
pub mod lexer;
/// Resource bounds for untrusted input.
pub mod limits;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer and constructs
/// a binary AST whose shape encodes precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with source offsets.
/// - Bounds parenthesis nesting.
pub mod parser;
/// The value module defines the numeric type used throughout evaluation.
pub mod value;
/// The variable table consulted by the lexer.
///
/// Maps case-sensitive names to numbers and parses `NAME=VALUE` bindings given
/// on the command line.
pub mod variables;
