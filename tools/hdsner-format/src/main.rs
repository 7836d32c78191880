//! HDSNER dataset formatter
//!
//! Copies the `MULTICLASS` splits of every dataset under an input directory
//! into a new output tree and converts each split from BIO text into the
//! JSON span format.

mod format;
mod layout;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::format::{format_datasets, FormatConfig};
use crate::layout::OutputNaming;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "hdsner-format")]
#[command(
    about = "Copy and transform files from a source directory to a new output directory structure"
)]
#[command(version)]
struct Cli {
    /// Source directory containing datasets (e.g. CBMA, CDBE)
    #[arg(long, env = "HDSNER_INPUT_DIR")]
    input_dir: PathBuf,

    /// Destination directory for the transformed data
    #[arg(long, env = "HDSNER_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Prefix added to output dataset directory names
    #[arg(
        long,
        env = "HDSNER_OUTPUT_PREFIX",
        default_value = "hdsner_",
        allow_hyphen_values = true
    )]
    output_prefix: String,

    /// Suffix added to output dataset directory names (e.g. "-distant")
    #[arg(
        long,
        env = "HDSNER_OUTPUT_SUFFIX",
        default_value = "",
        allow_hyphen_values = true
    )]
    output_suffix: String,

    /// Also write meta.json with entity classes and label indices
    #[arg(long)]
    meta: bool,
}

impl From<Cli> for FormatConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
            naming: OutputNaming {
                prefix: cli.output_prefix,
                suffix: cli.output_suffix,
            },
            write_meta: cli.meta,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = FormatConfig::from(Cli::parse());
    let summary = format_datasets(&config)?;

    info!(
        datasets = summary.datasets_processed,
        skipped = summary.datasets_skipped,
        converted = summary.files_converted,
        missing = summary.files_missing,
        failed = summary.files_failed,
        "Done"
    );
    Ok(())
}
