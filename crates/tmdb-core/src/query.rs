//! Ordered query parameter map and query string serialization.
//!
//! [`QueryParams`] is the output of the parameter encoder and the input of the
//! executor. Keys are unique; values are already rendered to their wire form.

use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters left literal in query keys and values.
///
/// Commas stay unescaped because TMDB expects literal comma-separated lists.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',');

/// Keys whose values identify a user and are masked in log output.
const CREDENTIAL_KEYS: [&str; 3] = ["api_key", "session_id", "guest_session_id"];

/// Insertion-ordered map of query parameters with unique keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Insert a value, replacing any previous value for the same key.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Move every entry of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingError`] if a key exists in both maps.
    pub fn merge(&mut self, other: QueryParams) -> Result<()> {
        for (key, value) in other.pairs {
            if self.contains_key(key) {
                return Err(Error::EncodingError(format!(
                    "query parameter `{key}` is set by more than one option record"
                )));
            }
            self.pairs.push((key, value));
        }
        Ok(())
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Copy with credential values (`api_key`, `session_id`,
    /// `guest_session_id`) replaced by `[REDACTED]`, for logging.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| {
                if CREDENTIAL_KEYS.contains(k) {
                    (*k, "[REDACTED]".to_string())
                } else {
                    (*k, v.clone())
                }
            })
            .collect();
        Self { pairs }
    }

    /// Serialize to `k=v&k=v`, percent-encoding everything except
    /// alphanumerics and `-._~,`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_COMPONENT),
                    utf8_percent_encode(v, QUERY_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
