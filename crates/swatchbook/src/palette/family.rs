//! Colour families: one shade scale each.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::step::ShadeStep;

/// An opaque colour expression.
///
/// Values are carried through exactly as written. Nothing in this crate parses
/// or normalises them, so `hsl(var(--x) / <alpha-value>)` and `#fff` are
/// equally valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        ColorValue(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue(value)
    }
}

/// A single colour family such as `neutral` or `red`.
///
/// Each step appears at most once; adding a step that already exists replaces
/// its value.
///
/// # Example
///
/// ```rust
/// use swatchbook::Family;
///
/// let neutral = Family::new()
///     .shade(50, "hsl(0 0% 98%)")
///     .shade(950, "hsl(0 0% 4%)");
///
/// assert_eq!(neutral.get(50).unwrap().as_str(), "hsl(0 0% 98%)");
/// assert!(neutral.get(500).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Family {
    shades: BTreeMap<ShadeStep, ColorValue>,
}

impl Family {
    /// Creates an empty family.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a family by expanding `pattern` once per step.
    ///
    /// `{family}` and `{step}` in the pattern are replaced with the family
    /// name and the step number. The substitution is textual; the resulting
    /// values are as opaque as any other.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatchbook::{Family, DEFAULT_SCALE};
    ///
    /// let blue = Family::from_pattern(
    ///     "blue",
    ///     "hsl(var(--base-colour-{family}-{step}) / <alpha-value>)",
    ///     DEFAULT_SCALE.iter().copied(),
    /// );
    ///
    /// assert_eq!(
    ///     blue.get(600).unwrap().as_str(),
    ///     "hsl(var(--base-colour-blue-600) / <alpha-value>)"
    /// );
    /// ```
    pub fn from_pattern<I>(family: &str, pattern: &str, steps: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let with_family = pattern.replace("{family}", family);
        steps.into_iter().fold(Self::new(), |acc, step| {
            let value = with_family.replace("{step}", &step.to_string());
            acc.shade(step, value)
        })
    }

    /// Adds a shade, returning the updated family for chaining.
    pub fn shade<V: Into<ColorValue>>(mut self, step: u16, value: V) -> Self {
        self.insert(step, value);
        self
    }

    /// Adds or replaces a shade in place.
    pub fn insert<V: Into<ColorValue>>(&mut self, step: u16, value: V) -> Option<ColorValue> {
        self.shades.insert(ShadeStep(step), value.into())
    }

    /// Returns the value at `step`, if the family defines it.
    pub fn get(&self, step: u16) -> Option<&ColorValue> {
        self.shades.get(&ShadeStep(step))
    }

    /// Returns true if the family defines `step`.
    pub fn has(&self, step: u16) -> bool {
        self.shades.contains_key(&ShadeStep(step))
    }

    /// Iterates shades from the lightest step to the darkest.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeStep, &ColorValue)> {
        self.shades.iter().map(|(step, value)| (*step, value))
    }

    /// Returns the defined steps in ascending order.
    pub fn steps(&self) -> impl Iterator<Item = ShadeStep> + '_ {
        self.shades.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_replaces_existing_step() {
        let family = Family::new().shade(50, "old").shade(50, "new");
        assert_eq!(family.len(), 1);
        assert_eq!(family.get(50), Some(&ColorValue::from("new")));
    }

    #[test]
    fn test_insert_returns_previous_value() {
        let mut family = Family::new();
        assert_eq!(family.insert(100, "a"), None);
        assert_eq!(family.insert(100, "b"), Some(ColorValue::from("a")));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let family = Family::new()
            .shade(900, "c")
            .shade(50, "a")
            .shade(400, "b");
        let steps: Vec<u16> = family.steps().map(ShadeStep::value).collect();
        assert_eq!(steps, vec![50, 400, 900]);
    }

    #[test]
    fn test_from_pattern_substitutes_both_placeholders() {
        let red = Family::from_pattern("red", "{family}/{step}/{family}", [50u16, 950]);
        assert_eq!(red.get(50).unwrap().as_str(), "red/50/red");
        assert_eq!(red.get(950).unwrap().as_str(), "red/950/red");
        assert_eq!(red.len(), 2);
    }

    #[test]
    fn test_from_pattern_without_placeholders() {
        let flat = Family::from_pattern("x", "#000", [1u16, 2]);
        assert_eq!(flat.get(1).unwrap().as_str(), "#000");
        assert_eq!(flat.get(2).unwrap().as_str(), "#000");
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let raw = "  hsl(var(--a)  /  <alpha-value>) ";
        let family = Family::new().shade(50, raw);
        assert_eq!(family.get(50).unwrap().as_str(), raw);
    }

    #[test]
    fn test_deserialize_json_string_keys() {
        let family: Family = serde_json::from_str(r#"{"50": "A", "100": "B"}"#).unwrap();
        assert_eq!(family.get(50).unwrap().as_str(), "A");
        assert_eq!(family.get(100).unwrap().as_str(), "B");
    }
}
