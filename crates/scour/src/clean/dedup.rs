//! Exact-duplicate row removal.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::pipeline::Stage;
use super::report::{RowAudit, StageChange};
use crate::schema::Dataset;

/// Drops records equal in every cell to an earlier record.
///
/// Comparison covers extra columns too and happens after missing-value
/// detection, so two spellings of "missing" compare equal. Survivors keep
/// their first-seen relative order.
pub struct Deduplicate;

impl Stage for Deduplicate {
    fn name(&self) -> &'static str {
        "deduplicate"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        let mut change = StageChange::new(self.name(), String::new());
        let records = std::mem::take(&mut dataset.records);
        let mut first_seen: IndexMap<_, usize> = IndexMap::with_capacity(records.len());

        for (row, record) in records.into_iter().enumerate() {
            match first_seen.entry(record) {
                Entry::Occupied(entry) => change.record_removal(RowAudit {
                    row,
                    column: None,
                    original_value: None,
                    new_value: None,
                    reason: format!("duplicate of row {}", entry.get()),
                }),
                Entry::Vacant(entry) => {
                    entry.insert(row);
                }
            }
        }

        dataset.records = first_seen.into_keys().collect();
        change.description = format!("Removed {} duplicate row(s)", change.rows_removed);
        change
    }
}
