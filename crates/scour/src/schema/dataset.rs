//! The in-memory dataset the pipeline owns from load to write.

use tracing::debug;

use super::column::Column;
use super::record::Record;
use crate::error::{Result, ScourError};
use crate::input::DataTable;

/// Ordered records bound to the required column set.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Headers of non-required columns, in input order.
    pub extra_headers: Vec<String>,
    /// Records in input order.
    pub records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records that carry no extra columns.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            extra_headers: Vec::new(),
            records,
        }
    }

    /// Bind a loaded table to the required columns.
    ///
    /// This is the single point where a missing required column is detected.
    /// When a header repeats, the first occurrence is bound and later ones
    /// are kept as extras.
    pub fn from_table(table: DataTable) -> Result<Self> {
        let mut positions = [0usize; 10];
        for column in Column::ALL {
            positions[column.index()] =
                table
                    .column_index(column.header())
                    .ok_or_else(|| ScourError::MissingColumn {
                        column: column.header().to_string(),
                    })?;
        }

        let extra_positions: Vec<usize> = (0..table.column_count())
            .filter(|i| !positions.contains(i))
            .collect();
        let extra_headers = extra_positions
            .iter()
            .map(|&i| table.headers[i].clone())
            .collect();

        let width = table.column_count();
        let records = table
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, mut row)| {
                if row.len() != width {
                    return Err(ScourError::Format {
                        row: index + 1,
                        message: format!("expected {} fields, found {}", width, row.len()),
                    });
                }
                let cells = positions.map(|i| row[i].take());
                let extra = extra_positions.iter().map(|&i| row[i].take()).collect();
                Ok(Record::new(cells, extra))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            records = records.len(),
            extra_columns = extra_positions.len(),
            "bound table to required columns"
        );

        Ok(Self {
            extra_headers,
            records,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over one column's values in record order.
    pub fn column_values(&self, column: Column) -> impl Iterator<Item = Option<&str>> {
        self.records.iter().map(move |r| r.get(column))
    }
}
