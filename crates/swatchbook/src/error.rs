//! Token resolution and loading errors.

use std::fmt;
use std::path::PathBuf;

/// Which half of a token reference could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKind {
    /// The palette has no family with that name.
    Family,
    /// The family exists but does not define that step.
    Step,
}

/// Error returned when an alias points at a colour the palette does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTokenError {
    /// The semantic name whose reference dangles.
    pub alias: String,
    pub family: String,
    pub step: u16,
    pub kind: MissingKind,
}

impl MissingTokenError {
    /// A missing step within an existing family.
    pub fn new(alias: &str, family: &str, step: u16) -> Self {
        Self {
            alias: alias.to_string(),
            family: family.to_string(),
            step,
            kind: MissingKind::Step,
        }
    }

    /// A reference to a family the palette does not define at all.
    pub fn missing_family(alias: &str, family: &str, step: u16) -> Self {
        Self {
            kind: MissingKind::Family,
            ..Self::new(alias, family, step)
        }
    }
}

impl fmt::Display for MissingTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MissingKind::Family => write!(
                f,
                "alias '{}' references {}.{} but the palette has no '{}' family",
                self.alias, self.family, self.step, self.family
            ),
            MissingKind::Step => write!(
                f,
                "alias '{}' references {}.{} but '{}' has no step {}",
                self.alias, self.family, self.step, self.family, self.step
            ),
        }
    }
}

impl std::error::Error for MissingTokenError {}

/// Error returned when a `family.step` reference cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRefParseError {
    pub input: String,
}

impl fmt::Display for TokenRefParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid token reference '{}', expected 'family.step' such as 'neutral.50'",
            self.input
        )
    }
}

impl std::error::Error for TokenRefParseError {}

/// Error raised while reading palettes, alias specs or manifests from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot tell which format to write to {}; set `format` on the output", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("output {} uses the template format but names no template", .path.display())]
    TemplateRequired { path: PathBuf },
}
