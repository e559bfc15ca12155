//! Cleaning rules: value bounds and sentinels.

use chrono::NaiveDate;

use crate::error::{Result, ScourError};

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Create an inclusive range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ScourError::Config(format!(
                "{} bounds [{}, {}] are not a valid range",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Configuration for the cleaning stages.
#[derive(Debug, Clone)]
pub struct CleaningConfig {
    /// Accepted ages.
    pub age_bounds: Bounds,
    /// Accepted salaries.
    pub salary_bounds: Bounds,
    /// Date substituted for missing or unparseable joining dates.
    pub sentinel_date: NaiveDate,
    /// Token substituted for missing text and invalid contact details.
    pub unknown: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            age_bounds: Bounds::new(18.0, 65.0),
            salary_bounds: Bounds::new(10_000.0, 500_000.0),
            sentinel_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            unknown: "Unknown".to_string(),
        }
    }
}

impl CleaningConfig {
    /// Reject configurations the stages cannot honor.
    pub fn validate(&self) -> Result<()> {
        self.age_bounds.validate("age")?;
        self.salary_bounds.validate("salary")?;
        if self.unknown.trim().is_empty() {
            return Err(ScourError::Config(
                "unknown token must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
