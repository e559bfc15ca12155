//! Main Scour struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clean::{CleaningConfig, CleaningReport, Pipeline};
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::output::{Writer, WriterConfig, project};
use crate::schema::{CleanRecord, Dataset};

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Default)]
pub struct ScourConfig {
    /// Loader configuration.
    pub parser: ParserConfig,
    /// Bounds and sentinels for the cleaning stages.
    pub cleaning: CleaningConfig,
    /// Output configuration.
    pub writer: WriterConfig,
}

/// Result of cleaning a data file.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Cleaned rows in output column order.
    pub records: Vec<CleanRecord>,
    /// What every stage changed.
    pub report: CleaningReport,
    /// Summary counts.
    pub summary: CleanSummary,
}

impl CleanResult {
    /// Serializable view of the run for audit files.
    pub fn audit(&self) -> AuditReport<'_> {
        AuditReport {
            source: &self.source,
            summary: &self.summary,
            report: &self.report,
        }
    }
}

/// Audit file contents.
#[derive(Debug, Serialize)]
pub struct AuditReport<'a> {
    pub source: &'a SourceMetadata,
    pub summary: &'a CleanSummary,
    pub report: &'a CleaningReport,
}

/// Summary of a cleaning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanSummary {
    /// Data rows read from the input.
    pub rows_read: usize,
    /// Rows dropped as exact duplicates.
    pub duplicates_removed: usize,
    /// Rows in the cleaned output.
    pub rows_written: usize,
    /// Total cell values rewritten.
    pub values_changed: usize,
    /// Rewritten values per column.
    pub values_changed_by_column: IndexMap<String, usize>,
    /// Columns left empty because no usable value existed to fill from.
    pub degenerate_columns: Vec<String>,
    /// Input columns outside the output schema.
    pub dropped_columns: Vec<String>,
}

/// The cleaning driver: load, bind, clean, project.
pub struct Scour {
    config: ScourConfig,
    parser: Parser,
    pipeline: Pipeline,
    writer: Writer,
}

impl Scour {
    /// Create a Scour instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScourConfig::default())
    }

    /// Create a Scour instance with custom configuration.
    pub fn with_config(config: ScourConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let pipeline = Pipeline::standard(&config.cleaning);
        let writer = Writer::with_config(config.writer.clone());

        Self {
            config,
            parser,
            pipeline,
            writer,
        }
    }

    /// Replace the standard stage order.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Load and clean a file without writing anything.
    ///
    /// Halts on the first structural error: unreadable file, malformed
    /// table, or missing required column.
    pub fn clean(&self, path: impl AsRef<Path>) -> Result<CleanResult> {
        self.config.cleaning.validate()?;

        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;
        info!(
            file = %source.file,
            rows = source.row_count,
            columns = source.column_count,
            "loaded input"
        );

        self.clean_table(table, source)
    }

    /// Clean an already-loaded table.
    pub fn clean_table(&self, table: DataTable, source: SourceMetadata) -> Result<CleanResult> {
        self.config.cleaning.validate()?;

        let rows_read = table.row_count();
        let mut dataset = Dataset::from_table(table)?;
        let report = self.pipeline.run(&mut dataset);
        let records = project(&dataset, &self.config.cleaning)?;

        let summary = CleanSummary {
            rows_read,
            duplicates_removed: report.rows_removed,
            rows_written: records.len(),
            values_changed: report.values_changed,
            values_changed_by_column: report.values_changed_by_column(),
            degenerate_columns: report.degenerate_columns(),
            dropped_columns: dataset.extra_headers.clone(),
        };

        Ok(CleanResult {
            source,
            records,
            report,
            summary,
        })
    }

    /// Clean `input` and write the result to `output`, replacing it.
    pub fn clean_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<CleanResult> {
        let result = self.clean(input)?;
        self.writer.write(output, &result.records)?;
        Ok(result)
    }

    /// Write an existing result to `output`.
    pub fn write(&self, result: &CleanResult, output: impl AsRef<Path>) -> Result<()> {
        self.writer.write(output, &result.records)
    }
}

impl Default for Scour {
    fn default() -> Self {
        Self::new()
    }
}
