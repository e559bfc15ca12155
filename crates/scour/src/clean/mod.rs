//! Cleaning stages and the pipeline that orders them.

mod config;
mod contact;
mod date;
mod dedup;
mod numeric;
mod pipeline;
mod report;
mod text;

pub use config::{Bounds, CleaningConfig};
pub use contact::{EmailValidator, PhoneValidator, is_valid_email, is_valid_phone};
pub use date::{DateNormalizer, parse_day_first};
pub use dedup::Deduplicate;
pub use numeric::{AgeNormalizer, SalaryNormalizer, mean, median, parse_number};
pub use pipeline::{Pipeline, Stage};
pub use report::{CleaningReport, RowAudit, StageChange};
pub use text::{GenderCanonicalizer, TextNormalizer};
