//! The resolved semantic table.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::palette::ColorValue;

/// Semantic names mapped to concrete palette values, in alias order.
///
/// This is what the styling layer consumes. It is produced by
/// [`resolve`](super::resolve) and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticTable {
    entries: Vec<(String, ColorValue)>,
}

impl SemanticTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: ColorValue) {
        self.entries.push((name.to_string(), value));
    }

    /// Returns the value bound to a semantic name.
    pub fn get(&self, name: &str) -> Option<&ColorValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Iterates `(name, value)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the semantic names in alias order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SemanticTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
