//! Diff engine for comparing column value sets

mod report;
mod set_ops;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::model::{DiffSummary, ValueSet};
use crate::parser::{CsvExtractor, Delimiter};
use crate::source::{read_source, RawSource};

pub use report::build_report;
pub use set_ops::{difference, union, SetDiff};

/// Result of one comparison, with the context needed to present it
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    /// Header whose values were compared
    pub header: String,
    /// Display name of the original file
    pub original_name: String,
    /// Display name of the updated file
    pub updated_name: String,
    #[serde(flatten)]
    pub summary: DiffSummary,
}

impl DiffReport {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.summary.has_changes()
    }
}

/// Main diff engine
pub struct DiffEngine {
    config: Config,
}

impl DiffEngine {
    /// Create a new diff engine with configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read, extract and compare both sources, stopping at the first failure.
    ///
    /// The original is read before the updated file, and both are read
    /// before either is parsed.
    pub fn run(&self) -> Result<DiffReport> {
        self.config.validate()?;
        let header = self.config.header.as_str();

        let original = read_source(&self.config.original)?;
        let updated = read_source(&self.config.updated)?;

        let original_values = self.extract(&original, header)?;
        let updated_values = self.extract(&updated, header)?;

        let diff = SetDiff::compute(&original_values, &updated_values);
        let summary = build_report(
            &original_values,
            &updated_values,
            &diff.dropped,
            &diff.added,
        );

        info!(
            header = %header,
            added = summary.added_count,
            dropped = summary.dropped_count,
            "diff complete"
        );

        Ok(DiffReport {
            header: header.to_string(),
            original_name: original.name,
            updated_name: updated.name,
            summary,
        })
    }

    fn extract(&self, source: &RawSource, header: &str) -> Result<ValueSet> {
        let delimiter = self
            .config
            .delimiter
            .unwrap_or_else(|| Delimiter::for_path(source.path.as_path()));
        debug!(name = %source.name, delimiter = %delimiter, "parsing");

        CsvExtractor::new(delimiter).extract_column(&source.text, &source.name, header)
    }
}

/// Convenience function to run a comparison
pub fn run_diff(config: &Config) -> Result<DiffReport> {
    DiffEngine::new(config.clone()).run()
}
