//! The built-in site tokens.
//!
//! Three families (`blue`, `neutral`, `red`) on the default scale. Every value
//! is an HSL expression over a `--base-colour-<family>-<step>` custom property
//! with a Tailwind `<alpha-value>` slot, so the actual colours live in the
//! site's stylesheet and can change per theme.

use once_cell::sync::Lazy;

use crate::alias::AliasSpec;
use crate::palette::{BasePalette, Family, DEFAULT_SCALE};

/// Value pattern for every preset shade.
pub const SITE_PATTERN: &str = "hsl(var(--base-colour-{family}-{step}) / <alpha-value>)";

/// Families in the preset palette.
pub const SITE_FAMILIES: &[&str] = &["blue", "neutral", "red"];

static SITE_PALETTE: Lazy<BasePalette> = Lazy::new(|| {
    SITE_FAMILIES.iter().fold(BasePalette::new(), |palette, name| {
        palette.family(
            name,
            Family::from_pattern(name, SITE_PATTERN, DEFAULT_SCALE.iter().copied()),
        )
    })
});

static FUNCTIONAL_ALIASES: Lazy<AliasSpec> = Lazy::new(|| {
    AliasSpec::new()
        .alias("bgColour-default", "neutral", 50)
        .alias("bgColour-muted", "neutral", 100)
        .alias("fgColour-accent", "red", 950)
        .alias("fgColour-default", "neutral", 950)
        .alias("fgColour-muted", "neutral", 800)
});

/// The preset base palette.
pub fn site_palette() -> &'static BasePalette {
    &SITE_PALETTE
}

/// The preset functional colour aliases.
pub fn functional_aliases() -> &'static AliasSpec {
    &FUNCTIONAL_ALIASES
}
