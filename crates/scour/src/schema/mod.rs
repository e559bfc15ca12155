//! Typed view of the employee table: required columns, records and datasets.

mod column;
mod dataset;
mod record;

pub use column::{Column, ColumnKind};
pub use dataset::Dataset;
pub use record::{CleanRecord, Record};
pub(crate) use record::format_decimal;
