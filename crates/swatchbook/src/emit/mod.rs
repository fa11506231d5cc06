//! Output formats for resolved token tables.
//!
//! The semantic table is handed to tooling this crate knows nothing about: a
//! utility-class generator, a component library, a stylesheet. Each [`Format`]
//! renders the same table for one of those consumers:
//!
//! | Format | Output |
//! |--------|--------|
//! | `json` | Pretty JSON object |
//! | `yaml` | YAML mapping |
//! | `css` | One custom property per alias under a selector |
//! | `module` | `export const <name> = { ... };` ES module |
//! | `csv` | `name,family,step,value` rows |
//! | `template` | A user MiniJinja template |
//!
//! All formats keep alias order and end with a newline.

mod css;
mod templates;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alias::AliasSpec;
use crate::resolve::SemanticTable;
use crate::util::is_js_identifier;

pub use css::custom_property;

/// Selector used by the CSS format unless told otherwise.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Binding name used by the module format unless told otherwise.
pub const DEFAULT_EXPORT_NAME: &str = "functionalColourTokens";

/// Error raised while rendering a token table.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("the template format needs a template source")]
    MissingTemplate,

    #[error("'{0}' is not a valid JavaScript identifier for the module export")]
    InvalidExportName(String),

    #[error("an alias with an empty name has no CSS custom property")]
    EmptyAliasName,

    #[error("aliases '{first}' and '{second}' both map to the CSS custom property {property}")]
    DuplicateProperty {
        property: String,
        first: String,
        second: String,
    },

    #[error("alias '{0}' is in the table but not in the alias spec")]
    UnknownAlias(String),
}

/// The shape an emitted table takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Yaml,
    Css,
    Module,
    Csv,
    Template,
}

impl Format {
    /// All formats, in the order they are listed in help output.
    pub const ALL: &'static [Format] = &[
        Format::Json,
        Format::Yaml,
        Format::Css,
        Format::Module,
        Format::Csv,
        Format::Template,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Css => "css",
            Format::Module => "module",
            Format::Csv => "csv",
            Format::Template => "template",
        }
    }

    /// Picks a format from an output file extension.
    ///
    /// `.ts`, `.js` and `.mjs` map to the module format; unknown extensions
    /// yield `None`.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "css" => Some(Format::Css),
            "ts" | "js" | "mjs" => Some(Format::Module),
            "csv" => Some(Format::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .iter()
            .copied()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Format::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown format '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Knobs for the formats that take them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// CSS selector wrapping the custom properties.
    pub selector: String,
    /// Binding name for the module format.
    pub export_name: String,
    /// Template source for [`Format::Template`].
    pub template: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            template: None,
        }
    }
}

impl EmitOptions {
    pub fn selector(mut self, selector: &str) -> Self {
        self.selector = selector.to_string();
        self
    }

    pub fn export_name(mut self, name: &str) -> Self {
        self.export_name = name.to_string();
        self
    }

    pub fn template(mut self, source: impl Into<String>) -> Self {
        self.template = Some(source.into());
        self
    }
}

/// One row of emitter input: a resolved alias and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRow {
    pub name: String,
    pub value: String,
    pub property: String,
    pub family: String,
    pub step: u16,
}

/// Pairs a resolved table with the spec it came from, one row per alias.
///
/// Rows follow the table's order. The spec supplies the family and step
/// columns, so every table entry must have a spec entry.
pub(crate) fn rows(spec: &AliasSpec, table: &SemanticTable) -> Result<Vec<TokenRow>, EmitError> {
    table
        .iter()
        .map(|(name, value)| {
            let entry = spec
                .get(name)
                .ok_or_else(|| EmitError::UnknownAlias(name.to_string()))?;
            Ok(TokenRow {
                name: name.to_string(),
                value: value.as_str().to_string(),
                property: custom_property(name),
                family: entry.family.clone(),
                step: entry.step.value(),
            })
        })
        .collect()
}

/// Rows for the formats that key on the CSS property.
///
/// Transliteration can fold distinct names together, and an empty name
/// yields the reserved `--`; both are rejected.
fn property_rows(spec: &AliasSpec, table: &SemanticTable) -> Result<Vec<TokenRow>, EmitError> {
    let out = rows(spec, table)?;
    {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(out.len());
        for row in &out {
            if row.name.is_empty() {
                return Err(EmitError::EmptyAliasName);
            }
            if let Some(first) = seen.insert(row.property.as_str(), row.name.as_str()) {
                return Err(EmitError::DuplicateProperty {
                    property: row.property.clone(),
                    first: first.to_string(),
                    second: row.name.clone(),
                });
            }
        }
    }
    Ok(out)
}

/// Renders a resolved table in the requested format.
///
/// # Example
///
/// ```rust
/// use swatchbook::emit::{emit, EmitOptions, Format};
/// use swatchbook::{resolve, AliasSpec, BasePalette, Family};
///
/// let palette = BasePalette::new().family("neutral", Family::new().shade(50, "A"));
/// let spec = AliasSpec::new().alias("bg-default", "neutral", 50);
/// let table = resolve(&palette, &spec).unwrap();
///
/// let css = emit(Format::Css, &spec, &table, &EmitOptions::default()).unwrap();
/// assert_eq!(css, ":root {\n  --bg-default: A;\n}\n");
/// ```
pub fn emit(
    format: Format,
    spec: &AliasSpec,
    table: &SemanticTable,
    options: &EmitOptions,
) -> Result<String, EmitError> {
    let mut out = match format {
        Format::Json => serde_json::to_string_pretty(table)?,
        Format::Yaml => serde_yaml::to_string(table)?,
        Format::Css => {
            templates::render_builtin(templates::CSS, &property_rows(spec, table)?, options)?
        }
        Format::Module => {
            if !is_js_identifier(&options.export_name) {
                return Err(EmitError::InvalidExportName(options.export_name.clone()));
            }
            templates::render_builtin(templates::MODULE, &rows(spec, table)?, options)?
        }
        Format::Csv => to_csv(&rows(spec, table)?)?,
        Format::Template => {
            let source = options.template.as_deref().ok_or(EmitError::MissingTemplate)?;
            templates::render_custom(source, &property_rows(spec, table)?, options)?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn to_csv(rows: &[TokenRow]) -> Result<String, EmitError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "family", "step", "value"])?;
    for row in rows {
        let step = row.step.to_string();
        writer.write_record([
            row.name.as_str(),
            row.family.as_str(),
            step.as_str(),
            row.value.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
