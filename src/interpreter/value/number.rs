use std::str::FromStr;

use crate::error::ScanError;

/// A numeric value produced by scanning or evaluation.
///
/// Integer arithmetic stays integral; as soon as either operand of an operator
/// is a float, both operands are promoted and the result is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

/// A pair of operands after promotion to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a float; both are now floats.
    Floats(f64, f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Number {
    /// Parses an unsigned numeric literal exactly as the scanner does.
    ///
    /// A literal without a `.` is an integer, one with a `.` is a float.
    /// Returns `None` when the text is not a valid literal of that kind, when
    /// an integer does not fit in `i64`, or when a float is not finite.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::parse_literal("42"), Some(Number::Integer(42)));
    /// assert_eq!(Number::parse_literal("2.5"), Some(Number::Float(2.5)));
    /// assert_eq!(Number::parse_literal("1.2.3"), None);
    /// ```
    #[must_use]
    pub fn parse_literal(literal: &str) -> Option<Self> {
        Self::parse_with_magnitude(literal, literal)
    }

    fn parse_with_magnitude(text: &str, magnitude: &str) -> Option<Self> {
        if !magnitude.starts_with(|c: char| c.is_ascii_digit())
           || !magnitude.chars().all(|c| c.is_ascii_digit() || c == '.')
        {
            return None;
        }

        if magnitude.contains('.') {
            text.parse::<f64>().ok().filter(|value| value.is_finite()).map(Self::Float)
        } else {
            text.parse::<i64>().ok().map(Self::Integer)
        }
    }

    /// Converts the value to `f64`.
    ///
    /// Integers beyond 2^53 lose precision, the same way the float result of a
    /// mixed operation does.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_float(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(r) => r,
        }
    }

    /// Promotes two operands to a common representation.
    ///
    /// The result is [`Operands::Floats`] whenever either side is a float,
    /// regardless of which side it is on.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::number::{Number, Operands};
    ///
    /// let promoted = Number::Integer(1).promote(Number::Float(2.5));
    /// assert_eq!(promoted, Operands::Floats(1.0, 2.5));
    /// ```
    #[must_use]
    pub const fn promote(self, other: Self) -> Operands {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Operands::Integers(a, b),
            _ => Operands::Floats(self.as_float(), other.as_float()),
        }
    }
}

impl FromStr for Number {
    type Err = ScanError;

    /// Parses a literal with an optional leading `-`.
    ///
    /// Expressions cannot spell negative numbers, but a variable table can
    /// hold them, so values given on the command line accept a sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let magnitude = text.strip_prefix('-').unwrap_or(text);

        Self::parse_with_magnitude(text, magnitude)
            .ok_or_else(|| ScanError::MalformedNumber { literal: text.to_string(),
                                                        offset:  0, })
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` so floats never read as integers.
            Self::Float(r) => write!(f, "{r:?}"),
        }
    }
}
