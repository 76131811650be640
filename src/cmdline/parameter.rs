//! A single kernel parameter and its ordered values

use serde::Serialize;
use std::fmt;

/// Key half of a `KEY=VALUE` token
pub type Key = String;

/// One key of the command line and every value it was given, in order.
///
/// A flag (`quiet`) carries a single empty-string value after parsing and
/// serializes as the bare key. A parameter built by hand may carry no values
/// at all; it contributes nothing to the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    key: Key,
    values: Vec<String>,
}

impl Parameter {
    /// Create a parameter with no values
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            values: Vec::new(),
        }
    }

    /// Consume the parameter and return it with `value` appended
    ///
    /// ```
    /// use kcmdline::Parameter;
    ///
    /// let root = Parameter::new("root").with_value("/dev/sda2");
    /// assert_eq!(root.first(), Some("/dev/sda2"));
    /// ```
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append a value in place
    pub fn append(&mut self, value: impl Into<String>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// First value, if any
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Value at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Whether `value` is one of this parameter's values
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Same values under a different key
    pub(crate) fn rekeyed(self, key: &str) -> Self {
        Self {
            key: key.to_string(),
            values: self.values,
        }
    }

    pub(crate) fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Tokens this parameter contributes to the command line.
    ///
    /// One token per value; an empty value becomes a bare `KEY`.
    pub fn tokens(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| {
                if value.is_empty() {
                    self.key.clone()
                } else {
                    format!("{}={}", self.key, value)
                }
            })
            .collect()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

/// Accessors on a lookup result that may be absent.
///
/// Lets `store.get("console").first()` compile and return `None` when the key
/// is missing, without matching on the option first.
pub trait MaybeParameter {
    fn first(&self) -> Option<&str>;
    fn get(&self, index: usize) -> Option<&str>;
    fn contains(&self, value: &str) -> bool;
}

impl MaybeParameter for Option<Parameter> {
    fn first(&self) -> Option<&str> {
        self.as_ref().and_then(Parameter::first)
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.as_ref().and_then(|p| p.get(index))
    }

    fn contains(&self, value: &str) -> bool {
        self.as_ref().is_some_and(|p| p.contains(value))
    }
}

impl MaybeParameter for Option<&Parameter> {
    fn first(&self) -> Option<&str> {
        self.and_then(Parameter::first)
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.and_then(|p| p.get(index))
    }

    fn contains(&self, value: &str) -> bool {
        self.is_some_and(|p| p.contains(value))
    }
}
