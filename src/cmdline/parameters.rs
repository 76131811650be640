//! Ordered parameter collection with the command-line tokenizer and serializer
//!
//! Nothing in here locks. [`Parameters`] is plain owned data; the shared,
//! synchronized view lives in [`Cmdline`](super::Cmdline).

use super::options::AppendAllOptions;
use super::parameter::Parameter;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Parameters in order of first appearance, unique by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    /// Tokenize a command line.
    ///
    /// A single trailing newline is dropped, tokens are split on runs of
    /// whitespace and each token on its first `=`. Repeated keys collect their
    /// values on the entry created by the first occurrence. Never fails.
    ///
    /// ```
    /// use kcmdline::Parameters;
    ///
    /// let params = Parameters::parse("quiet console=ttyS0 console=ttyS1\n");
    /// assert_eq!(params.keys().collect::<Vec<_>>(), ["quiet", "console"]);
    /// assert_eq!(params.to_string(), "quiet console=ttyS0 console=ttyS1");
    /// ```
    pub fn parse(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let mut parsed = Self::default();

        for token in line.split_whitespace() {
            match token.split_once('=') {
                Some((key, value)) => parsed.append(key, value),
                None => parsed.append(token, ""),
            }
        }

        parsed
    }

    /// Parse a list of arguments as if they were one space-joined line
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let line = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::parse(&line)
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.key() == key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|p| p.key() == key)
    }

    /// Replace the entry for `key` in place, or push a new one at the end.
    ///
    /// The stored entry always carries `key`, even when `parameter` was built
    /// under another name.
    pub fn set(&mut self, key: &str, parameter: Parameter) {
        let parameter = if parameter.key() == key {
            parameter
        } else {
            tracing::warn!(
                "Parameter '{}' stored under key '{}'",
                parameter.key(),
                key
            );
            parameter.rekeyed(key)
        };

        match self.position(key) {
            Some(index) => self.0[index] = parameter,
            None => self.0.push(parameter),
        }
    }

    /// Add `value` to `key`, creating the entry at the end if needed
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        match self.position(key) {
            Some(index) => {
                self.0[index].append(value);
            }
            None => self.0.push(Parameter::new(key).with_value(value)),
        }
    }

    /// Fold `incoming` into this collection.
    ///
    /// Keys in `options.overwrite_keys` are replaced wholesale, all others
    /// accumulate value by value.
    pub fn merge(&mut self, incoming: Parameters, options: &AppendAllOptions) {
        for parameter in incoming {
            let key = parameter.key().to_string();

            if options.overwrites(&key) {
                tracing::trace!("Overwriting parameter '{}'", key);
                self.set(&key, parameter);
                continue;
            }

            for value in parameter.into_values() {
                self.append(&key, value);
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(Parameter::key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialized tokens, one per value, in parameter then value order
    pub fn strings(&self) -> Vec<String> {
        self.0.iter().flat_map(Parameter::tokens).collect()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strings().join(" "))
    }
}

impl FromStr for Parameters {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl IntoIterator for Parameters {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Parameter> for Parameters {
    /// Later parameters with an already-seen key replace the earlier entry
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut parameters = Self::default();
        for parameter in iter {
            let key = parameter.key().to_string();
            parameters.set(&key, parameter);
        }
        parameters
    }
}
