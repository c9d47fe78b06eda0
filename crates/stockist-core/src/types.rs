//! Core types for stockist-core.
//!
//! The two structured values the normalizer produces: an ordered
//! [`FeatureList`] and a key-value [`SpecificationMap`]. Both serialize to
//! the plain JSON shapes the storage layer persists (a string array and an
//! object).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// FeatureList
// ---------------------------------------------------------------------------

/// Ordered list of short product features.
///
/// Every entry is trimmed and non-empty. Duplicates are allowed; callers that
/// want uniqueness (the [`ProductDraft`](crate::ProductDraft)) check
/// [`contains`](Self::contains) before pushing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureList(Vec<String>);

impl FeatureList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature. Returns `false` (and stores nothing) when the text
    /// is empty after trimming.
    pub fn push(&mut self, feature: &str) -> bool {
        let feature = feature.trim();
        if feature.is_empty() {
            return false;
        }
        self.0.push(feature.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn contains(&self, feature: &str) -> bool {
        let feature = feature.trim();
        self.0.iter().any(|f| f == feature)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Canonical text form: one feature per line, each line newline-terminated.
    ///
    /// The trailing newline keeps a single-entry list on the line-splitting
    /// path when it is parsed again, so an entry containing a comma is not
    /// re-split. When any entry would be altered by line splitting (a leading
    /// bullet or bracket, an embedded line break) the list is written as a
    /// JSON array instead.
    pub fn to_text(&self) -> String {
        if self.0.iter().all(|f| is_line_safe_feature(f)) {
            self.0.iter().map(|f| format!("{f}\n")).collect()
        } else {
            Value::from(self.0.clone()).to_string()
        }
    }
}

fn is_line_safe_feature(feature: &str) -> bool {
    !feature.starts_with(['•', '-', '*', '['])
        && !feature.contains(['\n', '\r'])
}

impl<S: AsRef<str>> FromIterator<S> for FeatureList {
    /// Collects trimmed, non-empty entries; blanks are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item.as_ref());
        }
        list
    }
}

impl IntoIterator for FeatureList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// SpecificationMap
// ---------------------------------------------------------------------------

/// Named technical attributes of a product.
///
/// Keys are trimmed and non-empty; the last write for a key wins. Iteration
/// is in key order so rendered output is deterministic. Values built from
/// text are always JSON strings; values that arrived as a JSON object are
/// kept as they were.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificationMap(BTreeMap<String, Value>);

impl SpecificationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the trimmed key, replacing any previous value. Returns
    /// `false` (and stores nothing) when the key is empty after trimming.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        self.0.insert(key.to_string(), value.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value under `key` when it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key.trim())
    }

    pub fn extend(&mut self, other: SpecificationMap) {
        self.0.extend(other.0);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Canonical text form: `key: value` lines joined by newlines.
    ///
    /// Falls back to a JSON object when a line would not parse back to the
    /// same entry: a key holding `:` or a line break, a multi-line or padded
    /// value (a multi-line note), or a value that is not a string.
    pub fn to_text(&self) -> String {
        if self.0.iter().all(|(key, value)| is_line_safe_spec(key, value)) {
            self.0
                .iter()
                .map(|(key, value)| format!("{key}: {}", value.as_str().unwrap_or_default()))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let object: serde_json::Map<String, Value> = self
                .0
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Value::Object(object).to_string()
        }
    }
}

fn is_line_safe_spec(key: &str, value: &Value) -> bool {
    let Some(value) = value.as_str() else {
        return false;
    };
    !key.starts_with('{')
        && !key.contains([':', '\n', '\r'])
        && !value.is_empty()
        && value.trim() == value
        && !value.contains(['\n', '\r'])
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for SpecificationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a SpecificationMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
