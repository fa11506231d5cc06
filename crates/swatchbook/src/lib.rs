//! # Swatchbook - design tokens from palettes to semantic aliases
//!
//! Swatchbook turns a base palette (colour family → shade step → value) and a
//! hand-written list of semantic aliases into the flat table a styling layer
//! consumes. Authors then write `bgColour-default` instead of `neutral-50`,
//! and retuning the site means changing one alias, not every class name.
//!
//! Resolution is deliberately boring: each alias copies one palette value,
//! verbatim. The only thing that can go wrong is a reference to a family or
//! step that does not exist, and that is a [`MissingTokenError`] at build
//! time, never a silent fallback.
//!
//! ## Quick start
//!
//! ```rust
//! use swatchbook::{resolve, AliasSpec, BasePalette, Family};
//! use swatchbook::emit::{emit, EmitOptions, Format};
//!
//! let palette = BasePalette::new()
//!     .family("neutral", Family::new().shade(50, "#fafafa").shade(950, "#0a0a0a"))
//!     .family("red", Family::new().shade(950, "#450a0a"));
//!
//! let aliases = AliasSpec::new()
//!     .alias("bgColour-default", "neutral", 50)
//!     .alias("fgColour-default", "neutral", 950)
//!     .alias("fgColour-accent", "red", 950);
//!
//! let table = resolve(&palette, &aliases).unwrap();
//! assert_eq!(table.get("fgColour-accent").unwrap().as_str(), "#450a0a");
//!
//! let css = emit(Format::Css, &aliases, &table, &EmitOptions::default()).unwrap();
//! assert!(css.contains("--bgColour-default: #fafafa;"));
//! ```
//!
//! ## Layers
//!
//! - [`palette`]: [`BasePalette`], [`Family`], [`ShadeStep`]
//! - [`alias`]: [`AliasSpec`] and `family.step` references ([`TokenRef`])
//! - [`resolve()`] / [`check`]: the resolver
//! - [`emit`]: JSON, YAML, CSS, ES module, CSV and custom template output
//! - [`manifest`] and [`pipeline`]: file-driven builds (`swatchbook.yaml`)
//! - [`preset`]: a ready-made palette and alias set

pub mod alias;
pub mod emit;
mod error;
pub mod manifest;
pub mod palette;
pub mod pipeline;
pub mod preset;
mod resolve;
mod util;

pub use alias::{AliasEntry, AliasSpec, TokenRef};
pub use error::{LoadError, MissingKind, MissingTokenError, TokenRefParseError};
pub use manifest::{load_aliases, load_palette, Manifest, Output, MANIFEST_FILE_NAME};
pub use palette::{BasePalette, ColorValue, Family, ShadeBand, ShadeStep, DEFAULT_SCALE};
pub use pipeline::{build, build_file, render_outputs, BuildError, BuildReport, MissingTokens, Written};
pub use resolve::{check, resolve, SemanticTable};
pub use util::{display_width, pad_right, truncate_to_width};
