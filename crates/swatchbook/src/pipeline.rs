//! Manifest-driven builds.
//!
//! A build is: check every alias, resolve, render each output, write the
//! files. Any dangling alias stops the build before a single output is
//! touched, and all of them are reported at once so they can be fixed in one
//! pass.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::{emit, EmitError, Format};
use crate::error::{LoadError, MissingTokenError};
use crate::manifest::{Manifest, Output};
use crate::resolve::{check, resolve};

/// Every alias that failed to resolve during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTokens(pub Vec<MissingTokenError>);

impl fmt::Display for MissingTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "alias" } else { "aliases" };
        write!(f, "{} {} reference missing tokens", self.0.len(), noun)?;
        for err in &self.0 {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for MissingTokens {}

/// Error raised by [`build`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    MissingTokens(#[from] MissingTokens),

    #[error("failed to render {}: {source}", .path.display())]
    Emit {
        path: PathBuf,
        #[source]
        source: EmitError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An output a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub format: Format,
    pub bytes: usize,
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of semantic tokens resolved.
    pub tokens: usize,
    pub written: Vec<Written>,
}

/// Renders every output of `manifest` without writing anything.
///
/// Returns each output alongside its rendered text, in manifest order.
pub fn render_outputs(manifest: &Manifest) -> Result<Vec<(&Output, String)>, BuildError> {
    let missing = check(&manifest.palette, &manifest.aliases);
    if !missing.is_empty() {
        for err in &missing {
            tracing::error!(alias = %err.alias, "{}", err);
        }
        return Err(MissingTokens(missing).into());
    }

    // Unreachable after a clean `check`.
    let table = resolve(&manifest.palette, &manifest.aliases)
        .map_err(|err| MissingTokens(vec![err]))?;
    tracing::info!(tokens = table.len(), "resolved alias table");

    manifest
        .outputs
        .iter()
        .map(|output| {
            let text = emit(output.format, &manifest.aliases, &table, &output.options).map_err(
                |source| BuildError::Emit {
                    path: output.path.clone(),
                    source,
                },
            )?;
            Ok((output, text))
        })
        .collect()
}

/// Runs a full build: render every output, then write them all.
pub fn build(manifest: &Manifest) -> Result<BuildReport, BuildError> {
    let rendered = render_outputs(manifest)?;
    let mut written = Vec::with_capacity(rendered.len());

    for (output, text) in rendered {
        write_output(&output.path, &text)?;
        tracing::info!(path = %output.path.display(), format = %output.format, "wrote output");
        written.push(Written {
            path: output.path.clone(),
            format: output.format,
            bytes: text.len(),
        });
    }

    Ok(BuildReport {
        tokens: manifest.aliases.len(),
        written,
    })
}

/// Loads the manifest at `path` and builds it.
pub fn build_file(path: &Path) -> Result<BuildReport, BuildError> {
    tracing::info!(manifest = %path.display(), "starting build");
    let manifest = Manifest::load(path)?;
    build(&manifest)
}

fn write_output(path: &Path, text: &str) -> Result<(), BuildError> {
    let to_write_error = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, text).map_err(to_write_error)
}
