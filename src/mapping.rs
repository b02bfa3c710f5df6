//! Loosely-typed key/value mapping of URI components.

use std::collections::BTreeMap;

use crate::field::Field;
use crate::value::Value;

/// A mapping from component names to loosely-typed values.
///
/// This is what the splitter produces and what callers hand in when they
/// build a URI from structured fields or override some of its parts. Keys
/// are kept sorted. Keys that name no known component are kept, but the
/// assembler ignores them.
///
/// # Examples
///
/// ```
/// use uri_parts::{parse_from_mapping, RawParts};
///
/// let mapping = RawParts::new()
///     .with("scheme", "HTTPS")
///     .with("host", "example.com")
///     .with("port", 8443);
///
/// let parts = parse_from_mapping(&mapping);
/// assert_eq!(parts.scheme(), "https");
/// assert_eq!(parts.port(), Some(8443));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawParts {
    entries: BTreeMap<String, Value>,
}

impl RawParts {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value and returns the mapping, for chained construction.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns the value stored under a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the value stored for a known field, if present.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&Value> {
        self.get(field.as_str())
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Shallow-merges `overrides` on top of this mapping.
    ///
    /// Keys in `overrides` replace same-named keys; keys only present here
    /// are kept.
    #[must_use]
    pub fn merge(mut self, overrides: &Self) -> Self {
        for (key, value) in &overrides.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }
}

impl<K, V> FromIterator<(K, V)> for RawParts
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RawParts {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping() {
        let mapping = RawParts::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.len(), 0);
    }

    #[test]
    fn with_chains_inserts() {
        let mapping = RawParts::new().with("host", "a.test").with("port", 80);
        assert_eq!(mapping.get("host"), Some(&Value::from("a.test")));
        assert_eq!(mapping.field(Field::Port), Some(&Value::Int(80)));
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn insert_returns_replaced_value() {
        let mut mapping = RawParts::new().with("path", "/a");
        let old = mapping.insert("path", "/b");
        assert_eq!(old, Some(Value::from("/a")));
        assert_eq!(mapping.get("path"), Some(&Value::from("/b")));
    }

    #[test]
    fn merge_replaces_only_named_keys() {
        let base = RawParts::new().with("path", "/a").with("query", "q=1");
        let overrides = RawParts::new().with("path", "/b");

        let merged = base.merge(&overrides);
        assert_eq!(merged.get("path"), Some(&Value::from("/b")));
        assert_eq!(merged.get("query"), Some(&Value::from("q=1")));
    }

    #[test]
    fn merge_with_null_still_replaces() {
        let base = RawParts::new().with("port", 8080);
        let merged = base.merge(&RawParts::new().with("port", Value::Null));
        assert_eq!(merged.get("port"), Some(&Value::Null));
    }

    #[test]
    fn keys_are_sorted() {
        let mapping: RawParts = [("scheme", "http"), ("host", "x"), ("fragment", "f")]
            .into_iter()
            .collect();
        let keys: Vec<_> = mapping.keys().collect();
        assert_eq!(keys, vec!["fragment", "host", "scheme"]);
    }

    #[test]
    fn remove_drops_key() {
        let mut mapping = RawParts::new().with("user", "bob");
        assert_eq!(mapping.remove("user"), Some(Value::from("bob")));
        assert!(!mapping.contains("user"));
    }
}
