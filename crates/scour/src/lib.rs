//! Scour: batch cleaner for messy employee tables.
//!
//! Scour loads a delimited file, removes exact duplicate rows, repairs every
//! required column with a fixed rule, and writes the result in a fixed
//! column order.
//!
//! # Core Principles
//!
//! - **Values never abort a run**: unparseable ages, bad emails and the like
//!   are replaced with a statistic or a sentinel
//! - **Structure does**: an unreadable file, a ragged table or a missing
//!   required column stops the run before anything is written
//! - **Full provenance**: every rewritten cell and removed row is audited
//!
//! # Example
//!
//! ```no_run
//! use scour::Scour;
//!
//! let scour = Scour::new();
//! let result = scour.clean_file("input_data.csv", "cleaned_data.csv").unwrap();
//!
//! println!("Rows written: {}", result.summary.rows_written);
//! println!("Values changed: {}", result.summary.values_changed);
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod output;
pub mod schema;

mod scour;

pub use crate::scour::{AuditReport, CleanResult, CleanSummary, Scour, ScourConfig};
pub use clean::{Bounds, CleaningConfig, CleaningReport, Pipeline, RowAudit, Stage, StageChange};
pub use error::{Result, ScourError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use output::{Writer, WriterConfig, write_audit};
pub use schema::{CleanRecord, Column, ColumnKind, Dataset, Record};
