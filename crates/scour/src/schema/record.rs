//! Per-row accessors: raw records during cleaning, typed records after.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::column::Column;
use crate::input::Cell;

/// One input row with its required cells addressable by [`Column`].
///
/// Cells hold raw strings until the cleaning stages rewrite them in place.
/// Columns outside the required set ride along in `extra` so that
/// deduplication still compares whole rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    cells: [Cell; 10],
    /// Cells of non-required columns, in input order.
    pub extra: Vec<Cell>,
}

impl Record {
    /// Build a record from required cells in output order plus extras.
    pub fn new(cells: [Cell; 10], extra: Vec<Cell>) -> Self {
        Self { cells, extra }
    }

    /// Build a record from `(column, value)` pairs; unnamed columns are missing.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (Column, &'a str)>) -> Self {
        let mut record = Self::new(Default::default(), Vec::new());
        for (column, value) in pairs {
            record.set(column, Some(value.to_string()));
        }
        record
    }

    /// Value of a column, `None` when missing.
    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells[column.index()].as_deref()
    }

    /// Mutable access to a column's cell.
    pub fn get_mut(&mut self, column: Column) -> &mut Cell {
        &mut self.cells[column.index()]
    }

    /// Replace a column's cell, returning the previous one.
    pub fn set(&mut self, column: Column, value: Cell) -> Cell {
        std::mem::replace(&mut self.cells[column.index()], value)
    }
}

/// A fully cleaned output row.
///
/// Field order and serialized names define the output header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    #[serde(rename = "EmpID")]
    pub emp_id: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
    /// `None` only when no input age was usable.
    #[serde(rename = "Age")]
    pub age: Option<i64>,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "City")]
    pub city: String,
    /// `None` only when no input salary was usable.
    #[serde(rename = "Salary", serialize_with = "serialize_decimal")]
    pub salary: Option<f64>,
    #[serde(rename = "JoiningDate")]
    pub joining_date: NaiveDate,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

impl CleanRecord {
    /// Output header in column order.
    pub fn headers() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.header()).collect()
    }

    /// Render the record as output strings in column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.emp_id.clone().unwrap_or_default(),
            self.name.clone(),
            self.age.map(|a| a.to_string()).unwrap_or_default(),
            self.gender.clone(),
            self.department.clone(),
            self.city.clone(),
            self.salary.map(format_decimal).unwrap_or_default(),
            self.joining_date.format("%Y-%m-%d").to_string(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

/// Shortest decimal form: `52000`, `52000.5`.
pub(crate) fn format_decimal(value: f64) -> String {
    value.to_string()
}

fn serialize_decimal<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&format_decimal(*v)),
        None => serializer.serialize_none(),
    }
}
