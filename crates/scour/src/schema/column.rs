//! Required column definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cleaned value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Passed through untouched.
    Identifier,
    /// Whole numbers.
    Integer,
    /// Numbers that keep their fractional part.
    Decimal,
    /// Trimmed free text.
    Text,
    /// Calendar date without time.
    Date,
    /// Email address.
    Email,
    /// Ten-digit phone number.
    Phone,
}

/// One of the ten columns every input must carry.
///
/// Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    EmpId,
    Name,
    Age,
    Gender,
    Department,
    City,
    Salary,
    JoiningDate,
    Email,
    Phone,
}

impl Column {
    /// All required columns in output order.
    pub const ALL: [Column; 10] = [
        Column::EmpId,
        Column::Name,
        Column::Age,
        Column::Gender,
        Column::Department,
        Column::City,
        Column::Salary,
        Column::JoiningDate,
        Column::Email,
        Column::Phone,
    ];

    /// Free-text columns, in the order the text normalizer visits them.
    pub const TEXT: [Column; 4] = [
        Column::Name,
        Column::Gender,
        Column::Department,
        Column::City,
    ];

    /// Header name as it appears in input and output files.
    pub fn header(&self) -> &'static str {
        match self {
            Column::EmpId => "EmpID",
            Column::Name => "Name",
            Column::Age => "Age",
            Column::Gender => "Gender",
            Column::Department => "Department",
            Column::City => "City",
            Column::Salary => "Salary",
            Column::JoiningDate => "JoiningDate",
            Column::Email => "Email",
            Column::Phone => "Phone",
        }
    }

    /// Position in the output column order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a column by its exact header name.
    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == name)
    }

    /// Cleaned value type.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::EmpId => ColumnKind::Identifier,
            Column::Age => ColumnKind::Integer,
            Column::Salary => ColumnKind::Decimal,
            Column::JoiningDate => ColumnKind::Date,
            Column::Email => ColumnKind::Email,
            Column::Phone => ColumnKind::Phone,
            Column::Name | Column::Gender | Column::Department | Column::City => ColumnKind::Text,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
