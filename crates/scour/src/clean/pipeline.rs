//! Ordered stage pipeline.

use tracing::{debug, info, warn};

use super::config::CleaningConfig;
use super::contact::{EmailValidator, PhoneValidator};
use super::date::DateNormalizer;
use super::dedup::Deduplicate;
use super::numeric::{AgeNormalizer, SalaryNormalizer};
use super::report::{CleaningReport, RowAudit, StageChange};
use super::text::{GenderCanonicalizer, TextNormalizer};
use crate::input::Cell;
use crate::schema::{Column, Dataset};

/// A single cleaning step.
///
/// Stages never fail: a bad value is repaired, not reported as an error.
pub trait Stage {
    /// Short stable name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Rewrite the dataset in place and describe what changed.
    fn apply(&self, dataset: &mut Dataset) -> StageChange;
}

/// Stages run in insertion order over one dataset.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The standard order: deduplicate, age, salary, text, gender, date, email, phone.
    pub fn standard(config: &CleaningConfig) -> Self {
        Self::new()
            .with_stage(Deduplicate)
            .with_stage(AgeNormalizer::new(config.age_bounds))
            .with_stage(SalaryNormalizer::new(config.salary_bounds))
            .with_stage(TextNormalizer::new(&config.unknown))
            .with_stage(GenderCanonicalizer::new(&config.unknown))
            .with_stage(DateNormalizer::new(config.sentinel_date))
            .with_stage(EmailValidator::new(&config.unknown))
            .with_stage(PhoneValidator::new(&config.unknown))
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the stages in run order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over `dataset`.
    pub fn run(&self, dataset: &mut Dataset) -> CleaningReport {
        let mut report = CleaningReport::new();

        for stage in &self.stages {
            let change = stage.apply(dataset);

            if change.degenerate {
                warn!(
                    stage = stage.name(),
                    column = change.column.as_deref().unwrap_or_default(),
                    "no usable values to derive a fill value; leaving cells empty"
                );
            }
            info!(
                stage = stage.name(),
                values_changed = change.values_changed,
                rows_removed = change.rows_removed,
                "{}",
                change.description
            );
            for audit in &change.row_audits {
                debug!(
                    stage = stage.name(),
                    row = audit.row,
                    column = audit.column.as_deref().unwrap_or_default(),
                    original = audit.original_value.as_deref().unwrap_or_default(),
                    new = audit.new_value.as_deref().unwrap_or_default(),
                    reason = %audit.reason,
                    "value rewritten"
                );
            }

            report.add_change(change);
        }

        report
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard(&CleaningConfig::default())
    }
}

/// Rewrite every cell of `column`, auditing the ones that change.
///
/// `rewrite` returns the new cell and the reason to record if it differs
/// from the old one.
pub(crate) fn rewrite_column<F>(dataset: &mut Dataset, column: Column, change: &mut StageChange, mut rewrite: F)
where
    F: FnMut(Option<&str>) -> (Cell, &'static str),
{
    for (row, record) in dataset.records.iter_mut().enumerate() {
        let (new_value, reason) = rewrite(record.get(column));
        if new_value.as_deref() == record.get(column) {
            continue;
        }

        let original_value = record.set(column, new_value.clone());
        change.record_value(RowAudit {
            row,
            column: Some(column.header().to_string()),
            original_value,
            new_value,
            reason: reason.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Record;

    struct Shout;

    impl Stage for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn apply(&self, dataset: &mut Dataset) -> StageChange {
            let mut change = StageChange::new(self.name(), "uppercased names").with_column("Name");
            rewrite_column(dataset, Column::Name, &mut change, |v| {
                (v.map(|s| s.to_uppercase()), "uppercased")
            });
            change
        }
    }

    #[test]
    fn test_standard_order() {
        let pipeline = Pipeline::default();
        assert_eq!(
            pipeline.stage_names(),
            vec!["deduplicate", "age", "salary", "text", "gender", "joining_date", "email", "phone"]
        );
    }

    #[test]
    fn test_rewrite_column_audits_only_changes() {
        let mut dataset = Dataset::new(vec![
            Record::from_pairs([(Column::Name, "ann")]),
            Record::from_pairs([(Column::Name, "BOB")]),
            Record::new(Default::default(), Vec::new()),
        ]);

        let report = Pipeline::new().with_stage(Shout).run(&mut dataset);

        assert_eq!(report.values_changed, 1);
        let audit = &report.changes[0].row_audits[0];
        assert_eq!(audit.row, 0);
        assert_eq!(audit.original_value.as_deref(), Some("ann"));
        assert_eq!(audit.new_value.as_deref(), Some("ANN"));
        assert_eq!(dataset.records[1].get(Column::Name), Some("BOB"));
        assert_eq!(dataset.records[2].get(Column::Name), None);
    }
}
