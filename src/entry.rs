//! Dictionary tree definitions

use std::collections::BTreeMap;

use serde_json::Value;

/// Interior node of the dictionary tree.
pub type EntryMap = BTreeMap<String, Entry>;

/// A value in the dictionary tree: either a translated string or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Leaf(String),
    Node(EntryMap),
}

impl Entry {
    #[must_use]
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Builds an interior node from `(key, entry)` pairs. Later duplicates win.
    #[must_use]
    pub fn node<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Node(entries.into_iter().map(|(key, entry)| (key.into(), entry)).collect())
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    #[must_use]
    pub const fn as_node(&self) -> Option<&EntryMap> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(map) => Some(map),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "string",
            Self::Node(_) => "mapping",
        }
    }

    /// Number of string leaves under (and including) this entry.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Node(map) => map.values().map(Self::leaf_count).sum(),
        }
    }

    /// Converts a JSON document into a dictionary entry.
    ///
    /// Numbers and booleans become leaves holding their JSON text, arrays become nodes keyed
    /// by element index, and `null` yields `None` so the owning key is dropped.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use copy_dict::Entry;
    ///
    /// let entry = Entry::from_json(json!({ "nav": { "about": "About" }, "year": 2025 }));
    /// let root = entry.as_ref().and_then(Entry::as_node);
    ///
    /// assert_eq!(root.and_then(|m| m.get("year")).and_then(Entry::as_leaf), Some("2025"));
    /// ```
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Leaf(text)),
            Value::Bool(_) | Value::Number(_) => Some(Self::Leaf(value.to_string())),
            Value::Array(items) => Some(Self::Node(
                items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        Self::from_json(item).map(|entry| (index.to_string(), entry))
                    })
                    .collect(),
            )),
            Value::Object(map) => Some(Self::Node(
                map.into_iter()
                    .filter_map(|(key, item)| Self::from_json(item).map(|entry| (key, entry)))
                    .collect(),
            )),
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl From<EntryMap> for Entry {
    fn from(map: EntryMap) -> Self {
        Self::Node(map)
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether `key` can appear as a single path segment under `separator`.
pub(crate) fn is_addressable_key(key: &str, separator: &str) -> bool {
    !key.is_empty() && !key.contains(separator)
}

/// Collects every resolvable leaf path under `map`, joined with `separator`, in depth-first
/// key order. Keys that are empty or contain the separator are skipped with their subtrees.
pub(crate) fn leaf_paths(map: &EntryMap, separator: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_leaf_paths(map, separator, None, &mut result);
    result
}

fn collect_leaf_paths(
    map: &EntryMap,
    separator: &str,
    prefix: Option<&str>,
    result: &mut Vec<String>,
) {
    for (key, entry) in map.iter().filter(|(key, _)| is_addressable_key(key, separator)) {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match entry {
            Entry::Leaf(_) => result.push(full_key),
            Entry::Node(child) => collect_leaf_paths(child, separator, Some(&full_key), result),
        }
    }
}

/// Number of leaves [`leaf_paths`] would return, without building the paths.
pub(crate) fn addressable_leaf_count(map: &EntryMap, separator: &str) -> usize {
    map.iter()
        .filter(|(key, _)| is_addressable_key(key, separator))
        .map(|(_, entry)| match entry {
            Entry::Leaf(_) => 1,
            Entry::Node(child) => addressable_leaf_count(child, separator),
        })
        .sum()
}
