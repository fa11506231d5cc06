//! Token resolution: alias spec + palette → semantic table.
//!
//! Resolution is a straight lookup. Each alias is looked up as
//! `palette[family][step]` and the value is copied across unchanged. A
//! reference the palette cannot satisfy is an authoring mistake, so it is
//! reported as a [`MissingTokenError`] rather than defaulted.
//!
//! - [`resolve`] stops at the first dangling alias
//! - [`check`] reports every dangling alias, for diagnostics

mod table;

pub use table::SemanticTable;

use crate::alias::{AliasEntry, AliasSpec};
use crate::error::MissingTokenError;
use crate::palette::{BasePalette, ColorValue};

/// Resolves every alias in `spec` against `palette`.
///
/// The returned table has exactly one entry per alias, in spec order, each
/// holding the palette's value verbatim.
///
/// # Errors
///
/// Returns [`MissingTokenError`] for the first alias whose family or step is
/// absent from the palette.
///
/// # Example
///
/// ```rust
/// use swatchbook::{resolve, AliasSpec, BasePalette, Family, MissingTokenError};
///
/// let palette = BasePalette::new()
///     .family("neutral", Family::new().shade(50, "A").shade(100, "B"));
///
/// let spec = AliasSpec::new()
///     .alias("bg-default", "neutral", 50)
///     .alias("bg-muted", "neutral", 100);
/// let table = resolve(&palette, &spec).unwrap();
/// assert_eq!(table.get("bg-default").unwrap().as_str(), "A");
/// assert_eq!(table.get("bg-muted").unwrap().as_str(), "B");
///
/// let bad = AliasSpec::new().alias("bg-default", "neutral", 999);
/// assert_eq!(
///     resolve(&palette, &bad).unwrap_err(),
///     MissingTokenError::new("bg-default", "neutral", 999),
/// );
/// ```
pub fn resolve(palette: &BasePalette, spec: &AliasSpec) -> Result<SemanticTable, MissingTokenError> {
    let mut table = SemanticTable::with_capacity(spec.len());
    for entry in spec {
        let value = lookup(palette, entry)?;
        tracing::debug!(alias = %entry.name, token = %entry.token_ref(), "resolved alias");
        table.push(&entry.name, value.clone());
    }
    Ok(table)
}

/// Reports every alias in `spec` that `palette` cannot satisfy, in spec order.
///
/// An empty result means [`resolve`] will succeed.
pub fn check(palette: &BasePalette, spec: &AliasSpec) -> Vec<MissingTokenError> {
    spec.iter()
        .filter_map(|entry| lookup(palette, entry).err())
        .collect()
}

fn lookup<'p>(palette: &'p BasePalette, entry: &AliasEntry) -> Result<&'p ColorValue, MissingTokenError> {
    let step = entry.step.value();
    let family = palette
        .get(&entry.family)
        .ok_or_else(|| MissingTokenError::missing_family(&entry.name, &entry.family, step))?;
    family
        .get(step)
        .ok_or_else(|| MissingTokenError::new(&entry.name, &entry.family, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingKind;
    use crate::palette::Family;

    fn palette() -> BasePalette {
        BasePalette::new()
            .family("neutral", Family::new().shade(50, "A").shade(100, "B"))
            .family("red", Family::new().shade(950, "R"))
    }

    #[test]
    fn test_resolve_copies_values() {
        let spec = AliasSpec::new()
            .alias("bg-default", "neutral", 50)
            .alias("bg-muted", "neutral", 100);
        let table = resolve(&palette(), &spec).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("bg-default").unwrap().as_str(), "A");
        assert_eq!(table.get("bg-muted").unwrap().as_str(), "B");
    }

    #[test]
    fn test_resolve_missing_step() {
        let spec = AliasSpec::new().alias("bg-default", "neutral", 999);
        let err = resolve(&palette(), &spec).unwrap_err();
        assert_eq!(err, MissingTokenError::new("bg-default", "neutral", 999));
    }

    #[test]
    fn test_resolve_missing_family() {
        let spec = AliasSpec::new().alias("fg-accent", "green", 500);
        let err = resolve(&palette(), &spec).unwrap_err();
        assert_eq!(err.kind, MissingKind::Family);
        assert_eq!(err.alias, "fg-accent");
        assert_eq!(err.family, "green");
        assert_eq!(err.step, 500);
    }

    #[test]
    fn test_resolve_stops_at_first_missing() {
        let spec = AliasSpec::new()
            .alias("ok", "neutral", 50)
            .alias("first-bad", "neutral", 1)
            .alias("second-bad", "blue", 1);
        let err = resolve(&palette(), &spec).unwrap_err();
        assert_eq!(err.alias, "first-bad");
    }

    #[test]
    fn test_check_reports_all_missing_in_order() {
        let spec = AliasSpec::new()
            .alias("first-bad", "neutral", 1)
            .alias("ok", "red", 950)
            .alias("second-bad", "blue", 1);
        let errors = check(&palette(), &spec);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], MissingTokenError::new("first-bad", "neutral", 1));
        assert_eq!(errors[1], MissingTokenError::missing_family("second-bad", "blue", 1));
    }

    #[test]
    fn test_check_empty_for_valid_spec() {
        let spec = AliasSpec::new().alias("bg", "neutral", 50);
        assert!(check(&palette(), &spec).is_empty());
    }

    #[test]
    fn test_empty_spec_resolves_to_empty_table() {
        let table = resolve(&palette(), &AliasSpec::new()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_two_aliases_may_share_a_token() {
        let spec = AliasSpec::new()
            .alias("bg-default", "neutral", 50)
            .alias("card", "neutral", 50);
        let table = resolve(&palette(), &spec).unwrap();
        assert_eq!(table.get("bg-default"), table.get("card"));
    }
}
