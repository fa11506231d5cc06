//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use swatchbook::emit::{Format, DEFAULT_EXPORT_NAME, DEFAULT_SELECTOR};
use swatchbook::MANIFEST_FILE_NAME;

/// Resolve design tokens and emit them for your styling pipeline.
#[derive(Debug, Parser)]
#[command(name = "swatchbook", version, about)]
pub struct Cli {
    /// More log output (repeat for debug and trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build every output listed in a manifest
    Build {
        /// Manifest to build
        #[arg(short, long, default_value = MANIFEST_FILE_NAME)]
        manifest: PathBuf,

        /// Render outputs and list them without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve a palette and alias spec into one output
    Resolve {
        #[command(flatten)]
        inputs: Inputs,

        #[command(flatten)]
        emit: EmitArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Report every alias that points at a missing token
    Check {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Print the alias table with references and shade bands
    Show {
        /// Palette file (defaults to the built-in preset)
        #[arg(long, requires = "aliases")]
        palette: Option<PathBuf>,

        /// Alias spec file (defaults to the built-in preset)
        #[arg(long, requires = "palette")]
        aliases: Option<PathBuf>,
    },

    /// Emit the built-in site tokens
    Preset {
        #[command(flatten)]
        emit: EmitArgs,
    },
}

#[derive(Debug, Args)]
pub struct Inputs {
    /// Palette file (YAML, or JSON by extension)
    #[arg(long)]
    pub palette: PathBuf,

    /// Alias spec file (YAML, or JSON by extension)
    #[arg(long)]
    pub aliases: PathBuf,
}

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Output format: json, yaml, css, module, csv or template
    #[arg(short, long, default_value = "json")]
    pub format: Format,

    /// Selector for the css format
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Binding name for the module format
    #[arg(long, default_value = DEFAULT_EXPORT_NAME)]
    pub export_name: String,

    /// MiniJinja template for the template format
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::parse_from([
            "swatchbook",
            "resolve",
            "--palette",
            "p.yaml",
            "--aliases",
            "a.yaml",
        ]);
        match cli.command {
            Command::Resolve { emit, out, .. } => {
                assert_eq!(emit.format, Format::Json);
                assert_eq!(emit.selector, ":root");
                assert_eq!(emit.export_name, "functionalColourTokens");
                assert!(out.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::parse_from(["swatchbook", "-vv", "preset", "--format", "css"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Preset { emit } if emit.format == Format::Css
        ));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Cli::try_parse_from(["swatchbook", "preset", "--format", "toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_needs_both_files() {
        let result = Cli::try_parse_from(["swatchbook", "show", "--palette", "p.yaml"]);
        assert!(result.is_err());
    }
}
