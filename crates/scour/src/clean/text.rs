//! Free-text filling/trimming and gender canonicalization.

use super::pipeline::{Stage, rewrite_column};
use super::report::StageChange;
use crate::schema::{Column, Dataset};

/// Trims Name, Gender, Department and City; missing or blank values become the unknown token.
pub struct TextNormalizer {
    unknown: String,
}

impl TextNormalizer {
    pub fn new(unknown: impl Into<String>) -> Self {
        Self {
            unknown: unknown.into(),
        }
    }

    fn normalize(&self, value: Option<&str>) -> (Option<String>, &'static str) {
        match value.map(str::trim) {
            None => (Some(self.unknown.clone()), "missing"),
            Some("") => (Some(self.unknown.clone()), "blank"),
            Some(trimmed) => (Some(trimmed.to_string()), "trimmed whitespace"),
        }
    }
}

impl Stage for TextNormalizer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        let mut change = StageChange::new(self.name(), String::new());
        for column in Column::TEXT {
            rewrite_column(dataset, column, &mut change, |v| self.normalize(v));
        }

        let columns: Vec<&str> = Column::TEXT.iter().map(|c| c.header()).collect();
        change.description = format!(
            "Trimmed or filled {} value(s) across {}",
            change.values_changed,
            columns.join(", ")
        );
        change
    }
}

/// Uppercases Gender and rewrites MALE, FEMALE and UNKNOWN.
///
/// Any other value is kept in its uppercased form.
pub struct GenderCanonicalizer {
    unknown: String,
}

impl GenderCanonicalizer {
    pub fn new(unknown: impl Into<String>) -> Self {
        Self {
            unknown: unknown.into(),
        }
    }

    /// Canonical form of one gender value.
    pub fn canonicalize(&self, value: &str) -> String {
        let upper = value.to_uppercase();
        match upper.as_str() {
            "MALE" => "M".to_string(),
            "FEMALE" => "F".to_string(),
            "UNKNOWN" => self.unknown.clone(),
            _ => upper,
        }
    }
}

impl Stage for GenderCanonicalizer {
    fn name(&self) -> &'static str {
        "gender"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        let mut change = StageChange::new(self.name(), String::new()).with_column(Column::Gender.header());
        rewrite_column(dataset, Column::Gender, &mut change, |v| {
            (v.map(|g| self.canonicalize(g)), "canonicalized")
        });
        change.description = format!("Canonicalized {} gender value(s)", change.values_changed);
        change
    }
}
