//! Walks the dataset tree and converts every split.
//!
//! Only setup failures (unreadable input directory, output directory that
//! cannot be created) abort the run. Problems with a single dataset or file
//! are logged and the walk moves on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hdsner_core::{convert_file, copy_source, DatasetMeta, HdsnerError};
use tracing::{error, info, warn};

use crate::layout::{discover_datasets, Dataset, OutputNaming, Split, MULTICLASS_DIR};

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub naming: OutputNaming,
    /// Also write `meta.json` per dataset.
    pub write_meta: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub datasets_processed: usize,
    pub datasets_skipped: usize,
    pub files_converted: usize,
    pub files_missing: usize,
    pub files_failed: usize,
}

/// Convert every dataset under `config.input_dir`.
pub fn format_datasets(config: &FormatConfig) -> Result<ConversionSummary> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let datasets = discover_datasets(&config.input_dir).with_context(|| {
        format!(
            "Failed to list input directory {}",
            config.input_dir.display()
        )
    })?;

    let mut summary = ConversionSummary::default();
    for dataset in &datasets {
        let output_path = config
            .output_dir
            .join(config.naming.dir_name(&dataset.name));
        if let Err(e) = fs::create_dir_all(&output_path) {
            error!(path = %output_path.display(), "Error creating output directory: {e}");
            summary.datasets_skipped += 1;
            continue;
        }

        if !dataset.has_multiclass() {
            warn!(
                "'{}' directory not found in '{}'. Skipping dataset '{}'.",
                MULTICLASS_DIR,
                dataset.path.display(),
                dataset.name
            );
            summary.datasets_skipped += 1;
            continue;
        }

        info!(dataset = %dataset.name, output = %output_path.display(), "Processing dataset");
        if config.write_meta {
            write_meta(dataset, &output_path);
        }
        for split in Split::ALL {
            process_split(dataset, split, &output_path, &mut summary);
        }
        summary.datasets_processed += 1;
    }

    Ok(summary)
}

fn process_split(
    dataset: &Dataset,
    split: Split,
    output_path: &Path,
    summary: &mut ConversionSummary,
) {
    let source = dataset.source_path(split);
    let raw_copy = output_path.join(format!("{}.txt", split.name()));
    let json_out = output_path.join(format!("{}.json", split.name()));

    let result = copy_source(&source, &raw_copy).and_then(|_| convert_file(&source, &json_out));
    match result {
        Ok(records) => {
            info!(
                source = %source.display(),
                output = %json_out.display(),
                records,
                "Converted split"
            );
            summary.files_converted += 1;
        }
        Err(HdsnerError::SourceNotFound(path)) => {
            warn!("Source file not found: {}", path.display());
            summary.files_missing += 1;
        }
        Err(e) => {
            error!("Error processing {}: {e}", source.display());
            summary.files_failed += 1;
        }
    }
}

fn write_meta(dataset: &Dataset, output_path: &Path) {
    let classes = match dataset.single_classes() {
        Ok(classes) => classes,
        Err(e) => {
            error!("Error listing classes in {}: {e}", dataset.path.display());
            return;
        }
    };

    let meta_path = output_path.join("meta.json");
    if let Err(e) = DatasetMeta::from_classes(classes).write_to(&meta_path) {
        error!("Error writing {}: {e}", meta_path.display());
    }
}
