//! Subcommand handlers.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use console::style;
use swatchbook::emit::{emit, EmitOptions, Format};
use swatchbook::{
    check, load_aliases, load_palette, pad_right, preset, resolve, truncate_to_width, AliasSpec,
    BasePalette, Manifest,
};

use crate::cli::{Command, EmitArgs, Inputs};

/// Widest value column `show` prints before truncating.
const VALUE_COLUMN_WIDTH: usize = 60;

pub fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Build { manifest, dry_run } => build(&manifest, dry_run),
        Command::Resolve { inputs, emit, out } => resolve_to(&inputs, &emit, out.as_deref()),
        Command::Check { inputs } => check_inputs(&inputs),
        Command::Show { palette, aliases } => match (palette, aliases) {
            (Some(palette), Some(aliases)) => {
                let (palette, aliases) = load_inputs(&palette, &aliases)?;
                show(&palette, &aliases)
            }
            _ => show(preset::site_palette(), preset::functional_aliases()),
        },
        Command::Preset { emit } => {
            let text = render(preset::site_palette(), preset::functional_aliases(), &emit)?;
            print!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build(manifest_path: &Path, dry_run: bool) -> Result<ExitCode> {
    if dry_run {
        let manifest = Manifest::load(manifest_path)
            .with_context(|| format!("loading {}", manifest_path.display()))?;
        for (output, text) in swatchbook::render_outputs(&manifest)? {
            println!(
                "{} {} ({}, {} bytes)",
                style("would write").yellow(),
                output.path.display(),
                output.format,
                text.len()
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let report = swatchbook::build_file(manifest_path)?;
    for written in &report.written {
        println!(
            "{} {} ({}, {} bytes)",
            style("wrote").green(),
            written.path.display(),
            written.format,
            written.bytes
        );
    }
    println!(
        "{} tokens, {} outputs",
        report.tokens,
        report.written.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn resolve_to(inputs: &Inputs, args: &EmitArgs, out: Option<&Path>) -> Result<ExitCode> {
    let (palette, aliases) = load_inputs(&inputs.palette, &inputs.aliases)?;
    let text = render(&palette, &aliases, args)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %args.format, "wrote output");
        }
        None => print!("{}", text),
    }
    Ok(ExitCode::SUCCESS)
}

fn check_inputs(inputs: &Inputs) -> Result<ExitCode> {
    let (palette, aliases) = load_inputs(&inputs.palette, &inputs.aliases)?;
    let missing = check(&palette, &aliases);
    if missing.is_empty() {
        println!(
            "{} all {} aliases resolve",
            style("ok").green().bold(),
            aliases.len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for err in &missing {
        eprintln!("{} {}", style("missing").red().bold().for_stderr(), err);
    }
    eprintln!(
        "{} of {} aliases reference missing tokens",
        missing.len(),
        aliases.len()
    );
    Ok(ExitCode::from(2))
}

fn show(palette: &BasePalette, aliases: &AliasSpec) -> Result<ExitCode> {
    let table = resolve(palette, aliases)?;
    let rows: Vec<[String; 4]> = aliases
        .iter()
        .zip(table.iter())
        .map(|(entry, (_, value))| {
            [
                entry.name.clone(),
                entry.token_ref().to_string(),
                entry.step.band().to_string(),
                truncate_to_width(value.as_str(), VALUE_COLUMN_WIDTH),
            ]
        })
        .collect();

    let header = ["alias", "token", "band", "value"].map(String::from);
    let mut widths = [0usize; 3];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(swatchbook::display_width(cell));
        }
    }

    let line = |row: &[String; 4]| {
        format!(
            "{}  {}  {}  {}",
            pad_right(&row[0], widths[0]),
            pad_right(&row[1], widths[1]),
            pad_right(&row[2], widths[2]),
            row[3]
        )
    };
    println!("{}", style(line(&header)).bold());
    for row in &rows {
        println!("{}", line(row));
    }
    Ok(ExitCode::SUCCESS)
}

fn render(palette: &BasePalette, aliases: &AliasSpec, args: &EmitArgs) -> Result<String> {
    let table = resolve(palette, aliases)?;
    let mut options = EmitOptions::default()
        .selector(&args.selector)
        .export_name(&args.export_name);
    match &args.template {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading template {}", path.display()))?;
            options = options.template(source);
        }
        None if args.format == Format::Template => {
            bail!("--format template needs --template <PATH>")
        }
        None => {}
    }
    Ok(emit(args.format, aliases, &table, &options)?)
}

fn load_inputs(palette: &Path, aliases: &Path) -> Result<(BasePalette, AliasSpec)> {
    let palette = load_palette(palette)?;
    let aliases = load_aliases(aliases)?;
    tracing::debug!(
        families = palette.len(),
        shades = palette.shade_count(),
        aliases = aliases.len(),
        "loaded inputs"
    );
    Ok((palette, aliases))
}
