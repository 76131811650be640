//! Merge policy for [`Cmdline::append_all`](super::Cmdline::append_all)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Options for merging new tokens into an existing command line.
///
/// Keys listed in `overwrite_keys` have their whole value list replaced by the
/// incoming one. Every other key accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendAllOptions {
    #[serde(default)]
    pub overwrite_keys: BTreeSet<String>,
}

impl AppendAllOptions {
    /// Add keys which must be overwritten instead of appended to
    pub fn with_overwrite_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.overwrite_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Whether `key` follows the overwrite policy
    pub fn overwrites(&self, key: &str) -> bool {
        self.overwrite_keys.contains(key)
    }
}
