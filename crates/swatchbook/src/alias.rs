//! Alias specifications: semantic names pointing into a palette.
//!
//! An [`AliasSpec`] is the hand-authored half of the token pipeline. It lists,
//! in order, which palette entry each semantic role should use:
//!
//! ```yaml
//! bgColour-default: neutral.50
//! bgColour-muted: neutral.100
//! fgColour-accent: red.950
//! ```
//!
//! The spec only holds references. Whether they exist is decided when it is
//! resolved against a palette (see [`resolve`](crate::resolve)).

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TokenRefParseError;
use crate::palette::ShadeStep;

/// A reference to one palette entry, written `family.step`.
///
/// # Example
///
/// ```rust
/// use swatchbook::TokenRef;
///
/// let token: TokenRef = "neutral.50".parse().unwrap();
/// assert_eq!(token.family, "neutral");
/// assert_eq!(token.step.value(), 50);
/// assert_eq!(token.to_string(), "neutral.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef {
    pub family: String,
    pub step: ShadeStep,
}

impl TokenRef {
    pub fn new(family: &str, step: u16) -> Self {
        Self {
            family: family.to_string(),
            step: ShadeStep(step),
        }
    }
}

impl FromStr for TokenRef {
    type Err = TokenRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TokenRefParseError {
            input: s.to_string(),
        };
        let (family, step) = s.trim().rsplit_once('.').ok_or_else(err)?;
        let family = family.trim();
        if family.is_empty() {
            return Err(err());
        }
        let step = step.trim().parse::<u16>().map_err(|_| err())?;
        Ok(TokenRef::new(family, step))
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.family, self.step)
    }
}

impl Serialize for TokenRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// One semantic name and the palette entry it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasEntry {
    pub name: String,
    pub family: String,
    pub step: ShadeStep,
}

impl AliasEntry {
    pub fn new(name: &str, family: &str, step: u16) -> Self {
        Self {
            name: name.to_string(),
            family: family.to_string(),
            step: ShadeStep(step),
        }
    }

    /// The reference as a [`TokenRef`].
    pub fn token_ref(&self) -> TokenRef {
        TokenRef {
            family: self.family.clone(),
            step: self.step,
        }
    }
}

/// An ordered list of semantic aliases.
///
/// Names are unique. Declaring a name twice keeps its first position and
/// takes the newer reference.
///
/// # Example
///
/// ```rust
/// use swatchbook::AliasSpec;
///
/// let spec = AliasSpec::new()
///     .alias("bg-default", "neutral", 50)
///     .alias("bg-muted", "neutral", 100);
///
/// let names: Vec<&str> = spec.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, vec!["bg-default", "bg-muted"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSpec {
    entries: Vec<AliasEntry>,
}

impl AliasSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, returning the updated spec for chaining.
    pub fn alias(mut self, name: &str, family: &str, step: u16) -> Self {
        self.push(AliasEntry::new(name, family, step));
        self
    }

    /// Adds an alias from a parsed reference.
    pub fn alias_ref(mut self, name: &str, token: &TokenRef) -> Self {
        self.push(AliasEntry::new(name, &token.family, token.step.value()));
        self
    }

    /// Appends an entry, or updates the reference of an existing name in place.
    pub fn push(&mut self, entry: AliasEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                tracing::warn!(
                    alias = %entry.name,
                    previous = %existing.token_ref(),
                    replacement = %entry.token_ref(),
                    "alias declared more than once, keeping the later reference"
                );
                existing.family = entry.family;
                existing.step = entry.step;
            }
            None => self.entries.push(entry),
        }
    }

    /// Returns the entry for `name`.
    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AliasSpec {
    type Item = &'a AliasEntry;
    type IntoIter = std::slice::Iter<'a, AliasEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for AliasSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.token_ref())?;
        }
        map.end()
    }
}

const EMPTY_NAME: &str = "alias names must not be empty";

// Accepts either the compact ordered map (`name: family.step`) or a list of
// `{name, family, step}` records. Both keep document order.
impl<'de> Deserialize<'de> for AliasSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = AliasSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of alias names to 'family.step' references, or a list of {name, family, step} entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AliasSpec, A::Error> {
                let mut spec = AliasSpec::new();
                while let Some((name, token)) = access.next_entry::<String, TokenRef>()? {
                    if name.trim().is_empty() {
                        return Err(de::Error::custom(EMPTY_NAME));
                    }
                    spec = spec.alias_ref(&name, &token);
                }
                Ok(spec)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<AliasSpec, A::Error> {
                let mut spec = AliasSpec::new();
                while let Some(entry) = access.next_element::<AliasEntry>()? {
                    if entry.name.trim().is_empty() {
                        return Err(de::Error::custom(EMPTY_NAME));
                    }
                    spec.push(entry);
                }
                Ok(spec)
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ref_parse() {
        let token: TokenRef = "red.950".parse().unwrap();
        assert_eq!(token, TokenRef::new("red", 950));
    }

    #[test]
    fn test_token_ref_parse_uses_last_dot() {
        let token: TokenRef = "brand.primary.500".parse().unwrap();
        assert_eq!(token.family, "brand.primary");
        assert_eq!(token.step, ShadeStep(500));
    }

    #[test]
    fn test_token_ref_parse_trims_whitespace() {
        let token: TokenRef = " neutral . 50 ".parse().unwrap();
        assert_eq!(token, TokenRef::new("neutral", 50));
    }

    #[test]
    fn test_token_ref_parse_errors() {
        for bad in ["neutral", ".50", "neutral.", "neutral.dark", "neutral.-1", ""] {
            let err = bad.parse::<TokenRef>().unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn test_redeclared_alias_keeps_position() {
        let spec = AliasSpec::new()
            .alias("a", "neutral", 50)
            .alias("b", "neutral", 100)
            .alias("a", "red", 950);

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.iter().next().unwrap().name, "a");
        assert_eq!(spec.get("a").unwrap().token_ref(), TokenRef::new("red", 950));
    }

    #[test]
    fn test_deserialize_map_preserves_order() {
        let yaml = "zeta: neutral.50\nalpha: neutral.100\nmid: red.950\n";
        let spec: AliasSpec = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = spec.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(spec.get("mid").unwrap().family, "red");
    }

    #[test]
    fn test_deserialize_long_form_list() {
        let yaml = "- name: bg-default\n  family: neutral\n  step: 50\n- name: fg-accent\n  family: red\n  step: \"950\"\n";
        let spec: AliasSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("fg-accent").unwrap().step, ShadeStep(950));
    }

    #[test]
    fn test_deserialize_rejects_bad_reference() {
        let err = serde_yaml::from_str::<AliasSpec>("bg: neutral\n").unwrap_err();
        assert!(err.to_string().contains("invalid token reference"));
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let err = serde_yaml::from_str::<AliasSpec>("\"\": neutral.50\n").unwrap_err();
        assert!(err.to_string().contains("alias names must not be empty"));

        let err = serde_json::from_str::<AliasSpec>(r#"[{"name": " ", "family": "neutral", "step": 50}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("alias names must not be empty"));
    }

    #[test]
    fn test_serialize_compact_form() {
        let spec = AliasSpec::new().alias("bg", "neutral", 50);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"bg":"neutral.50"}"#);
    }
}
