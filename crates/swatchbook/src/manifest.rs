//! Build manifests and file loaders.
//!
//! A manifest (`swatchbook.yaml`) names the palette, the alias spec and the
//! outputs of one build:
//!
//! ```yaml
//! palette: tokens/palette.yaml
//! aliases:
//!   bgColour-default: neutral.50
//!   fgColour-accent: red.950
//! outputs:
//!   - path: src/designTokens.ts
//!   - path: src/styles/tokens.css
//!     selector: ":root"
//! ```
//!
//! `palette` and `aliases` take either a path or an inline value. Paths are
//! relative to the manifest's directory. Files ending in `.json` are read as
//! JSON, everything else as YAML.

use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, DeserializeOwned, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::alias::AliasSpec;
use crate::emit::{EmitOptions, Format};
use crate::error::LoadError;
use crate::palette::BasePalette;

/// File name looked up when no manifest path is given.
pub const MANIFEST_FILE_NAME: &str = "swatchbook.yaml";

/// Reads a palette from a YAML or JSON file.
pub fn load_palette(path: &Path) -> Result<BasePalette, LoadError> {
    load_document(path)
}

/// Reads an alias spec from a YAML or JSON file.
pub fn load_aliases(path: &Path) -> Result<AliasSpec, LoadError> {
    load_document(path)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&text).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn read_to_string(path: &Path) -> Result<String, LoadError> {
    tracing::debug!(path = %path.display(), "reading");
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
enum Source<T> {
    Path(PathBuf),
    Inline(T),
}

// A string is a path; anything else is handed to `T` as is, so its own
// errors reach the user.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Source<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SourceVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SourceVisitor<T> {
            type Value = Source<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a file path or an inline value")
            }

            fn visit_str<E: de::Error>(self, path: &str) -> Result<Source<T>, E> {
                Ok(Source::Path(PathBuf::from(path)))
            }

            fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Source<T>, A::Error> {
                T::deserialize(MapAccessDeserializer::new(access)).map(Source::Inline)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Source<T>, A::Error> {
                T::deserialize(SeqAccessDeserializer::new(access)).map(Source::Inline)
            }
        }

        deserializer.deserialize_any(SourceVisitor(PhantomData))
    }
}

impl<T: DeserializeOwned> Source<T> {
    fn load(self, base_dir: &Path) -> Result<T, LoadError> {
        match self {
            Source::Path(path) => load_document(&base_dir.join(path)),
            Source::Inline(value) => Ok(value),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    palette: Source<BasePalette>,
    aliases: Source<AliasSpec>,
    #[serde(default)]
    outputs: Vec<RawOutput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutput {
    path: PathBuf,
    format: Option<Format>,
    selector: Option<String>,
    export_name: Option<String>,
    template: Option<PathBuf>,
}

/// One file a build writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub format: Format,
    /// Destination, already joined onto the manifest directory.
    pub path: PathBuf,
    pub options: EmitOptions,
}

/// A fully loaded build manifest.
///
/// Loading reads every referenced file (palette, aliases, templates), so a
/// `Manifest` is self-contained and building from it touches the filesystem
/// only to write outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub palette: BasePalette,
    pub aliases: AliasSpec,
    pub outputs: Vec<Output>,
    /// Directory relative paths were resolved against.
    pub base_dir: PathBuf,
}

impl Manifest {
    /// Loads a manifest file and everything it references.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, path, base_dir)
    }

    /// Parses manifest text, resolving relative paths against `base_dir`.
    pub fn from_yaml_str(text: &str, base_dir: &Path) -> Result<Self, LoadError> {
        Self::parse(text, &base_dir.join(MANIFEST_FILE_NAME), base_dir)
    }

    fn parse(text: &str, origin: &Path, base_dir: &Path) -> Result<Self, LoadError> {
        let raw: RawManifest = serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
            path: origin.to_path_buf(),
            source,
        })?;

        let palette = raw.palette.load(base_dir)?;
        let aliases = raw.aliases.load(base_dir)?;
        let outputs = raw
            .outputs
            .into_iter()
            .map(|output| output.resolve(base_dir))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            families = palette.len(),
            aliases = aliases.len(),
            outputs = outputs.len(),
            "loaded manifest"
        );

        Ok(Self {
            palette,
            aliases,
            outputs,
            base_dir: base_dir.to_path_buf(),
        })
    }
}

impl RawOutput {
    fn resolve(self, base_dir: &Path) -> Result<Output, LoadError> {
        let path = base_dir.join(&self.path);
        let format = match self.format {
            Some(format) => format,
            None if self.template.is_some() => Format::Template,
            None => path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(Format::from_extension)
                .ok_or_else(|| LoadError::UnknownFormat { path: path.clone() })?,
        };

        let mut options = EmitOptions::default();
        if let Some(selector) = self.selector {
            options.selector = selector;
        }
        if let Some(export_name) = self.export_name {
            options.export_name = export_name;
        }
        match self.template {
            Some(template) => options.template = Some(read_to_string(&base_dir.join(template))?),
            None if format == Format::Template => {
                return Err(LoadError::TemplateRequired { path });
            }
            None => {}
        }

        Ok(Output {
            format,
            path,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_manifest() {
        let yaml = r#"
palette:
  neutral:
    50: A
    100: B
aliases:
  bg-muted: neutral.100
  bg-default: neutral.50
outputs:
  - path: out/tokens.css
    selector: "[data-theme='dark']"
  - path: out/tokens.ts
    export_name: tokens
"#;
        let manifest = Manifest::from_yaml_str(yaml, Path::new("/site")).unwrap();

        assert_eq!(manifest.palette.lookup("neutral", 100).unwrap().as_str(), "B");
        let names: Vec<&str> = manifest.aliases.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bg-muted", "bg-default"]);

        assert_eq!(manifest.outputs.len(), 2);
        assert_eq!(manifest.outputs[0].format, Format::Css);
        assert_eq!(manifest.outputs[0].path, PathBuf::from("/site/out/tokens.css"));
        assert_eq!(manifest.outputs[0].options.selector, "[data-theme='dark']");
        assert_eq!(manifest.outputs[1].format, Format::Module);
        assert_eq!(manifest.outputs[1].options.export_name, "tokens");
    }

    #[test]
    fn test_explicit_format_wins_over_extension() {
        let yaml = "palette: {}\naliases: {}\noutputs:\n  - path: tokens.txt\n    format: json\n";
        let manifest = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap();
        assert_eq!(manifest.outputs[0].format, Format::Json);
    }

    #[test]
    fn test_unknown_extension_needs_format() {
        let yaml = "palette: {}\naliases: {}\noutputs:\n  - path: tokens.scss\n";
        let err = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, LoadError::UnknownFormat { .. }));
    }

    #[test]
    fn test_template_format_needs_template() {
        let yaml = "palette: {}\naliases: {}\noutputs:\n  - path: tokens.txt\n    format: template\n";
        let err = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, LoadError::TemplateRequired { .. }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let yaml = "palette: {}\naliases: {}\ncolours: {}\n";
        let err = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, LoadError::Yaml { .. }));
    }

    #[test]
    fn test_inline_alias_errors_name_the_reference() {
        let yaml = "palette: {}\naliases:\n  bg: neutral\n";
        let err = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, LoadError::Yaml { .. }));
        let msg = err.to_string();
        assert!(msg.contains("invalid token reference 'neutral'"), "{msg}");

        let yaml = "palette: {}\naliases:\n  bg: neutral.99999\n";
        let msg = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap_err().to_string();
        assert!(msg.contains("invalid token reference 'neutral.99999'"), "{msg}");
    }

    #[test]
    fn test_inline_alias_list_form() {
        let yaml = "palette:\n  neutral:\n    50: A\naliases:\n  - name: bg\n    family: neutral\n    step: 50\n";
        let manifest = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap();
        assert_eq!(manifest.aliases.get("bg").unwrap().step.value(), 50);
    }

    #[test]
    fn test_inline_palette_errors_are_kept() {
        let yaml = "palette:\n  neutral:\n    dark: A\naliases: {}\n";
        let msg = Manifest::from_yaml_str(yaml, Path::new(".")).unwrap_err().to_string();
        assert!(!msg.contains("untagged"), "{msg}");
        assert!(msg.contains("shade step"), "{msg}");
    }

    #[test]
    fn test_missing_palette_file() {
        let yaml = "palette: does-not-exist.yaml\naliases: {}\n";
        let err = Manifest::from_yaml_str(yaml, Path::new("/nowhere")).unwrap_err();
        match err {
            LoadError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nowhere/does-not-exist.yaml"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
