// ============================================================
// Layer 2: ConvertUseCase
// ============================================================
// Runs the whole conversion in order:
//
//   Step 1: Parse + encode the input file   (Layer 4 - data)
//   Step 2: Dump the feature matrix         (Layer 6 - infra)
//   Step 3: Dump the label vector           (Layer 6 - infra)
//   Step 4: Save dataset info, if asked     (Layer 6 - infra)
//
// Step 1 finishes before any output file is opened, so an input
// error never leaves a partial dump behind for this run. A
// failure in steps 2-4 does leave the earlier outputs in place.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::loader::{CsvDatasetLoader, DEFAULT_CAPACITY, DEFAULT_NUM_FEATURES};
use crate::domain::{dataset::EncodedDataset, traits::DatasetSource};
use crate::infra::{
    array_format::DEFAULT_MAX_LINE_WIDTH,
    array_writer::{ArrayWriter, WriteMode},
    info_store::DatasetInfoStore,
};

// ─── Conversion Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input:          PathBuf,
    pub features_out:   PathBuf,
    pub labels_out:     PathBuf,
    /// Optional JSON summary (sizes + id-ordered class names)
    pub info_out:       Option<PathBuf>,
    pub num_features:   usize,
    /// Maximum record count; `None` means unbounded
    pub capacity:       Option<usize>,
    pub mode:           WriteMode,
    pub max_line_width: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input:          PathBuf::from("iris.data"),
            features_out:   PathBuf::from("xData_iris.txt"),
            labels_out:     PathBuf::from("yData_iris.txt"),
            info_out:       None,
            num_features:   DEFAULT_NUM_FEATURES,
            capacity:       Some(DEFAULT_CAPACITY),
            mode:           WriteMode::Truncate,
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
        }
    }
}

// ─── ConvertUseCase ──────────────────────────────────────────────────────────
pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Execute the conversion and hand back what was written
    pub fn execute(&self) -> Result<EncodedDataset> {
        let cfg = &self.config;
        tracing::debug!(?cfg, "Starting conversion");

        // ── Step 1: Parse and encode ─────────────────────────────────────────
        tracing::info!("Reading records from '{}'", cfg.input.display());
        let loader = CsvDatasetLoader::new(&cfg.input)
            .with_num_features(cfg.num_features)
            .with_capacity(cfg.capacity);
        let dataset = loader
            .load()
            .with_context(|| format!("Failed to convert '{}'", cfg.input.display()))?;
        tracing::info!(
            "Parsed {} records, {} features, {} classes",
            dataset.num_samples(),
            dataset.features.num_features(),
            dataset.classes.len()
        );

        // ── Steps 2 and 3: Dump both arrays ──────────────────────────────────
        let writer = ArrayWriter::new(cfg.mode, cfg.max_line_width);

        writer
            .write(&cfg.features_out, &dataset.features)
            .context("Failed to write feature matrix")?;
        tracing::info!("Feature matrix written to '{}'", cfg.features_out.display());

        writer
            .write(&cfg.labels_out, &dataset.labels)
            .context("Failed to write label vector")?;
        tracing::info!("Label vector written to '{}'", cfg.labels_out.display());

        // ── Step 4: Dataset info ─────────────────────────────────────────────
        if let Some(info_out) = &cfg.info_out {
            DatasetInfoStore::new(info_out).save(&dataset.info())?;
            tracing::info!("Dataset info written to '{}'", info_out.display());
        }

        Ok(dataset)
    }
}
