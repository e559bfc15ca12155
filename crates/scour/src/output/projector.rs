//! Projection of cleaned records onto the fixed output schema.

use chrono::NaiveDate;

use crate::clean::{CleaningConfig, is_valid_email, is_valid_phone, parse_number};
use crate::error::{Result, ScourError};
use crate::schema::{CleanRecord, Column, ColumnKind, Dataset, Record};

/// Select the ten output columns in order, dropping extras.
///
/// Every cell must already hold its cleaned form; a value that does not
/// is reported as [`ScourError::Uncleaned`] rather than coerced.
pub fn project(dataset: &Dataset, config: &CleaningConfig) -> Result<Vec<CleanRecord>> {
    dataset
        .records
        .iter()
        .enumerate()
        .map(|(row, record)| project_record(row, record, &config.unknown))
        .collect()
}

fn project_record(row: usize, record: &Record, unknown: &str) -> Result<CleanRecord> {
    for column in Column::ALL {
        check_kind(row, column, record.get(column), unknown)?;
    }

    let text = |column: Column| record.get(column).unwrap_or_default().to_string();

    Ok(CleanRecord {
        emp_id: record.get(Column::EmpId).map(str::to_string),
        name: text(Column::Name),
        age: record
            .get(Column::Age)
            .and_then(|v| v.parse::<i64>().ok()),
        gender: text(Column::Gender),
        department: text(Column::Department),
        city: text(Column::City),
        salary: record.get(Column::Salary).and_then(parse_number),
        joining_date: record
            .get(Column::JoiningDate)
            .and_then(parse_iso_date)
            .ok_or_else(|| uncleaned(row, Column::JoiningDate, None))?,
        email: text(Column::Email),
        phone: text(Column::Phone),
    })
}

/// Check a cell against its column's cleaned type.
///
/// Numeric columns may be empty (degenerate fill); every other column
/// except the identifier must be present.
fn check_kind(row: usize, column: Column, value: Option<&str>, unknown: &str) -> Result<()> {
    let ok = match (column.kind(), value) {
        (ColumnKind::Identifier, _) => true,
        (ColumnKind::Integer | ColumnKind::Decimal, None) => true,
        (_, None) => false,
        (ColumnKind::Integer, Some(v)) => v.parse::<i64>().is_ok(),
        (ColumnKind::Decimal, Some(v)) => parse_number(v).is_some(),
        (ColumnKind::Text, Some(v)) => !v.is_empty() && v.trim() == v,
        (ColumnKind::Date, Some(v)) => parse_iso_date(v).is_some(),
        (ColumnKind::Email, Some(v)) => v == unknown || is_valid_email(v),
        (ColumnKind::Phone, Some(v)) => v == unknown || is_valid_phone(v),
    };

    if ok { Ok(()) } else { Err(uncleaned(row, column, value)) }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn uncleaned(row: usize, column: Column, value: Option<&str>) -> ScourError {
    ScourError::Uncleaned {
        row,
        column: column.header().to_string(),
        value: value.unwrap_or_default().to_string(),
    }
}
