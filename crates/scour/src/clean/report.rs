//! Audit trail produced by the cleaning stages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of running a pipeline over a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Number of stages run.
    pub stages_run: usize,

    /// Number of cell values rewritten.
    pub values_changed: usize,

    /// Number of rows removed.
    pub rows_removed: usize,

    /// Detailed changes for each stage, in run order.
    pub changes: Vec<StageChange>,
}

impl CleaningReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stage change to the report.
    pub fn add_change(&mut self, change: StageChange) {
        self.stages_run += 1;
        self.values_changed += change.values_changed;
        self.rows_removed += change.rows_removed;
        self.changes.push(change);
    }

    /// Changed values per column, in first-touched order.
    pub fn values_changed_by_column(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for audit in self.changes.iter().flat_map(|c| &c.row_audits) {
            if let Some(column) = &audit.column {
                *counts.entry(column.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Columns whose fill statistic could not be computed.
    pub fn degenerate_columns(&self) -> Vec<String> {
        self.changes
            .iter()
            .filter(|c| c.degenerate)
            .filter_map(|c| c.column.clone())
            .collect()
    }
}

/// What a single stage did to the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageChange {
    /// Stage name.
    pub stage: String,

    /// Human-readable summary.
    pub description: String,

    /// Column the stage targets; `None` for row-level or multi-column stages.
    pub column: Option<String>,

    /// Number of cell values rewritten.
    pub values_changed: usize,

    /// Number of rows removed.
    pub rows_removed: usize,

    /// Value substituted for missing or invalid cells, when the stage computes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<String>,

    /// Set when no usable value existed to derive the fill value from.
    #[serde(default)]
    pub degenerate: bool,

    /// Per-row audit information.
    pub row_audits: Vec<RowAudit>,
}

impl StageChange {
    /// Create a change for `stage` with no effects yet.
    pub fn new(stage: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            description: description.into(),
            column: None,
            values_changed: 0,
            rows_removed: 0,
            fill_value: None,
            degenerate: false,
            row_audits: Vec::new(),
        }
    }

    /// Set the targeted column.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Record a rewritten cell.
    pub fn record_value(&mut self, audit: RowAudit) {
        self.values_changed += 1;
        self.row_audits.push(audit);
    }

    /// Record a removed row.
    pub fn record_removal(&mut self, audit: RowAudit) {
        self.rows_removed += 1;
        self.row_audits.push(audit);
    }
}

/// Audit information for a single row change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowAudit {
    /// Record position (0-based) when the stage ran.
    pub row: usize,

    /// Column that was changed; `None` when the whole row was removed.
    pub column: Option<String>,

    /// Original value before the stage; `None` when missing.
    pub original_value: Option<String>,

    /// New value after the stage; `None` when missing.
    pub new_value: Option<String>,

    /// Reason for the change.
    pub reason: String,
}
