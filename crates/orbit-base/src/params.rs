//! Ordered string-keyed parameter store
//!
//! A `ParameterSet` is an ordered map of names to rendered text values or
//! nested sets. It is the free-form "other values" bag carried by object
//! metadata, and the target of the flattened text representation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single stored value: rendered text or a nested subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Text(String),
    Tree(ParameterSet),
}

/// Ordered name → value store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Store a text value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), ParameterValue::Text(value.into()));
    }

    /// Store a nested set
    pub fn set_tree(&mut self, name: impl Into<String>, tree: ParameterSet) {
        self.values
            .insert(name.into(), ParameterValue::Tree(tree));
    }

    /// Get a text value
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParameterValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Get a nested set
    pub fn get_tree(&self, name: &str) -> Option<&ParameterSet> {
        match self.values.get(name) {
            Some(ParameterValue::Tree(t)) => Some(t),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        self.values.remove(name)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `key=value` text, nested keys joined with dots
    ///
    /// `pretty` puts one entry per line; otherwise entries are joined with
    /// `", "`.
    pub fn to_text(&self, pretty: bool) -> String {
        let mut entries = Vec::new();
        self.flatten("", &mut entries);
        let sep = if pretty { "\n" } else { ", " };
        entries.join(sep)
    }

    fn flatten(&self, prefix: &str, out: &mut Vec<String>) {
        for (name, value) in &self.values {
            let key = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match value {
                ParameterValue::Text(s) => out.push(format!("{key}={s}")),
                ParameterValue::Tree(t) => t.flatten(&key, out),
            }
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}
