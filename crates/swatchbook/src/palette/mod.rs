//! Base palettes: colour families keyed by name.
//!
//! - [`BasePalette`]: every family a site defines
//! - [`Family`]: one family's shade scale
//! - [`ShadeStep`] and [`ShadeBand`]: positions on the scale and what they are for
//! - [`ColorValue`]: an opaque colour expression
//!
//! A palette is built once, either through the builder methods or by
//! deserializing a nested `{family: {step: value}}` map, and is only read
//! afterwards.

mod family;
mod step;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use family::{ColorValue, Family};
pub use step::{ShadeBand, ShadeStep, DEFAULT_SCALE};

/// The raw colours a site draws from, organised by family and shade step.
///
/// # Example
///
/// ```rust
/// use swatchbook::{BasePalette, Family};
///
/// let palette = BasePalette::new()
///     .family("neutral", Family::new().shade(50, "A").shade(100, "B"))
///     .family("red", Family::new().shade(950, "C"));
///
/// assert_eq!(palette.lookup("neutral", 100).unwrap().as_str(), "B");
/// assert!(palette.lookup("blue", 50).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasePalette {
    families: BTreeMap<String, Family>,
}

impl BasePalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a family, returning the updated palette for chaining.
    ///
    /// A family with the same name is replaced wholesale.
    pub fn family(mut self, name: &str, family: Family) -> Self {
        self.insert(name, family);
        self
    }

    /// Adds or replaces a family in place.
    pub fn insert(&mut self, name: &str, family: Family) -> Option<Family> {
        self.families.insert(name.to_string(), family)
    }

    /// Returns the named family.
    pub fn get(&self, name: &str) -> Option<&Family> {
        self.families.get(name)
    }

    /// Returns true if the palette has a family called `name`.
    pub fn has(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Looks up a single colour.
    pub fn lookup(&self, family: &str, step: u16) -> Option<&ColorValue> {
        self.get(family).and_then(|f| f.get(step))
    }

    /// Iterates families in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Family)> {
        self.families.iter().map(|(name, family)| (name.as_str(), family))
    }

    /// Returns the family names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of (family, step) entries across all families.
    pub fn shade_count(&self) -> usize {
        self.families.values().map(Family::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BasePalette {
        BasePalette::new()
            .family("neutral", Family::new().shade(50, "A").shade(100, "B"))
            .family("blue", Family::new().shade(500, "C"))
    }

    #[test]
    fn test_lookup_hits_and_misses() {
        let palette = sample();
        assert_eq!(palette.lookup("neutral", 50).unwrap().as_str(), "A");
        assert!(palette.lookup("neutral", 999).is_none());
        assert!(palette.lookup("green", 50).is_none());
    }

    #[test]
    fn test_family_replaces_same_name() {
        let palette = sample().family("neutral", Family::new().shade(900, "Z"));
        assert_eq!(palette.len(), 2);
        assert!(palette.lookup("neutral", 50).is_none());
        assert_eq!(palette.lookup("neutral", 900).unwrap().as_str(), "Z");
    }

    #[test]
    fn test_names_are_sorted() {
        let palette = sample();
        let names: Vec<&str> = palette.names().collect();
        assert_eq!(names, vec!["blue", "neutral"]);
    }

    #[test]
    fn test_shade_count() {
        assert_eq!(sample().shade_count(), 3);
        assert_eq!(BasePalette::new().shade_count(), 0);
    }

    #[test]
    fn test_deserialize_yaml_nested_map() {
        let yaml = "neutral:\n  50: A\n  100: B\nred:\n  950: C\n";
        let palette: BasePalette = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(palette.lookup("neutral", 100).unwrap().as_str(), "B");
        assert_eq!(palette.lookup("red", 950).unwrap().as_str(), "C");
    }

    #[test]
    fn test_serialize_json_roundtrips_structure() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["neutral"]["50"], "A");
        assert_eq!(json["blue"]["500"], "C");
    }
}
