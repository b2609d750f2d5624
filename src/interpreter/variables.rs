use std::collections::{HashMap, hash_map};

use crate::interpreter::value::number::Number;

/// Errors raised while reading a `NAME=VALUE` binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The binding has no `=`.
    #[error("Binding '{0}' must have the form NAME=VALUE.")]
    MissingEquals(String),
    /// The name is empty or contains something other than ASCII letters.
    #[error("Variable name '{0}' must consist of letters only.")]
    InvalidName(String),
    /// The value is not a number literal.
    #[error("Variable value '{0}' is not a number.")]
    InvalidValue(String),
}

/// The table of named values an expression may refer to.
///
/// Names are case-sensitive and made of ASCII letters, which is what the
/// scanner recognises as an identifier. The table is only consulted while
/// scanning; parsing and evaluation never see names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, Number>,
}

impl Variables {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Number>) -> Option<Number> {
        self.values.insert(name.into(), value.into())
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Number> {
        self.values.get(name).copied()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the table has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Number> {
        self.values.iter()
    }

    /// Parses a command-line binding of the form `NAME=VALUE`.
    ///
    /// Whitespace around the name and the value is ignored. The value may be
    /// negative, since a table entry is not limited by the expression grammar.
    ///
    /// # Errors
    /// Returns a [`BindingError`] if the `=` is missing, the name is not made
    /// of letters, or the value is not a number.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{value::number::Number, variables::Variables};
    ///
    /// let (name, value) = Variables::parse_binding("rate=-0.5").unwrap();
    /// assert_eq!(name, "rate");
    /// assert_eq!(value, Number::Float(-0.5));
    ///
    /// assert!(Variables::parse_binding("x1=3").is_err());
    /// ```
    pub fn parse_binding(binding: &str) -> Result<(String, Number), BindingError> {
        let (name, value) = binding.split_once('=')
                                   .ok_or_else(|| BindingError::MissingEquals(binding.to_string()))?;
        let name = name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BindingError::InvalidName(name.to_string()));
        }

        let value = value.trim()
                         .parse::<Number>()
                         .map_err(|_| BindingError::InvalidValue(value.trim().to_string()))?;

        Ok((name.to_string(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, Number)> for Variables {
    fn from_iter<T: IntoIterator<Item = (S, Number)>>(iter: T) -> Self {
        Self { values: iter.into_iter()
                           .map(|(name, value)| (name.into(), value))
                           .collect(), }
    }
}

impl<S: Into<String>> Extend<(S, Number)> for Variables {
    fn extend<T: IntoIterator<Item = (S, Number)>>(&mut self, iter: T) {
        self.values
            .extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
    }
}

impl<'a> IntoIterator for &'a Variables {
    type IntoIter = hash_map::Iter<'a, String, Number>;
    type Item = (&'a String, &'a Number);

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
