//! kana-outline: convert stroke drawings into the practice-app outline and
//! audit the result.
//!
//! Usage: kana-outline <convert|update|validate> --source <svg dir> ...

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kana_outline::output::{read_outline_records, update_outline, write_outline};
use kana_outline::{
    build_all, build_character, validate_records, OutlineConfig, SvgDirectorySource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kana-outline")]
#[command(about = "Stroke outline conversion for kana practice")]
struct Cli {
    /// JSON config overriding hint radii, match rules and subscript placement
    #[arg(long, global = true, env = "KANA_OUTLINE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every glyph in canonical order into one outline file
    Convert {
        /// Directory holding one <glyph>.svg per plain kana
        #[arg(long)]
        source: PathBuf,
        /// Outline JSON to write
        #[arg(long)]
        output: PathBuf,
    },

    /// Rebuild a single glyph and replace its record in an existing outline
    Update {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Glyph to rebuild, e.g. きゃ
        glyph: String,
    },

    /// Check an outline against the source drawings
    Validate {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        outline: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<OutlineConfig> {
    match path {
        Some(p) => OutlineConfig::load(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(OutlineConfig::default()),
    }
}

fn source_for(dir: &Path, cfg: &OutlineConfig) -> SvgDirectorySource {
    SvgDirectorySource::new(dir).with_fallback(cfg.default_view_box)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert { source, output } => {
            let src = source_for(&source, &cfg);
            let defs = build_all(&src, &cfg)
                .with_context(|| format!("conversion from {} failed", source.display()))?;
            info!(glyphs = defs.len(), "conversion complete");
            write_outline(&output, &defs)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        Command::Update {
            source,
            output,
            glyph,
        } => {
            let src = source_for(&source, &cfg);
            let def = build_character(&glyph, &src, &cfg)
                .with_context(|| format!("failed to build {glyph}"))?;
            update_outline(&output, def)
                .with_context(|| format!("failed to update {}", output.display()))?;
            println!("Updated {glyph} in {}", output.display());
        }
        Command::Validate { source, outline } => {
            let src = source_for(&source, &cfg);
            let records = read_outline_records(&outline)
                .with_context(|| format!("failed to read {}", outline.display()))?;
            let report = validate_records(&records, &src);
            if report.is_valid() {
                println!("Kana outline validation passed.");
            } else {
                println!("Validation failed:");
                for v in &report.violations {
                    println!("- {v}");
                }
            }
            std::process::exit(report.exit_code());
        }
    }
    Ok(())
}
