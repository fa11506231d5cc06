//! Shade steps and the bands they belong to.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The standard shade scale, lightest first.
pub const DEFAULT_SCALE: &[u16] = &[50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A position on a colour family's shade scale.
///
/// Steps are plain numbers (`50`, `100`, ... `950`). They order numerically,
/// so a [`Family`](super::Family) always iterates from lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShadeStep(pub u16);

impl ShadeStep {
    /// Returns the numeric value of the step.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the utility band this step is intended for.
    pub fn band(self) -> ShadeBand {
        match self.0 {
            0..=400 => ShadeBand::Background,
            401..=799 => ShadeBand::Border,
            _ => ShadeBand::Foreground,
        }
    }
}

impl From<u16> for ShadeStep {
    fn from(step: u16) -> Self {
        ShadeStep(step)
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ShadeStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

// YAML hands us integer keys, JSON object keys always arrive as strings.
impl<'de> Deserialize<'de> for ShadeStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StepVisitor;

        impl<'de> Visitor<'de> for StepVisitor {
            type Value = ShadeStep;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade step such as 50 or \"950\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeStep, E> {
                u16::try_from(v)
                    .map(ShadeStep)
                    .map_err(|_| E::custom(format!("shade step {} is out of range", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeStep, E> {
                u16::try_from(v)
                    .map(ShadeStep)
                    .map_err(|_| E::custom(format!("shade step {} is out of range", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeStep, E> {
                v.trim()
                    .parse::<u16>()
                    .map(ShadeStep)
                    .map_err(|_| E::custom(format!("invalid shade step '{}'", v)))
            }
        }

        deserializer.deserialize_any(StepVisitor)
    }
}

/// Which kind of utility a shade step is meant to feed.
///
/// Light steps back surfaces, the middle of the scale draws borders, and the
/// dark end is for text. Resolution never looks at this; it only annotates
/// listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadeBand {
    Background,
    Border,
    Foreground,
}

impl ShadeBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadeBand::Background => "background",
            ShadeBand::Border => "border",
            ShadeBand::Foreground => "foreground",
        }
    }
}

impl fmt::Display for ShadeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ShadeStep(50).band(), ShadeBand::Background);
        assert_eq!(ShadeStep(400).band(), ShadeBand::Background);
        assert_eq!(ShadeStep(500).band(), ShadeBand::Border);
        assert_eq!(ShadeStep(700).band(), ShadeBand::Border);
        assert_eq!(ShadeStep(800).band(), ShadeBand::Foreground);
        assert_eq!(ShadeStep(950).band(), ShadeBand::Foreground);
    }

    #[test]
    fn test_default_scale_is_ascending() {
        assert!(DEFAULT_SCALE.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(DEFAULT_SCALE.len(), 11);
    }

    #[test]
    fn test_deserialize_from_integer_and_string() {
        let from_int: ShadeStep = serde_yaml::from_str("50").unwrap();
        let from_str: ShadeStep = serde_json::from_str("\"950\"").unwrap();
        assert_eq!(from_int, ShadeStep(50));
        assert_eq!(from_str, ShadeStep(950));
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<ShadeStep>("\"dark\"").is_err());
        assert!(serde_json::from_str::<ShadeStep>("70000").is_err());
        assert!(serde_json::from_str::<ShadeStep>("-5").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ShadeStep(100).to_string(), "100");
        assert_eq!(ShadeBand::Border.to_string(), "border");
    }
}
