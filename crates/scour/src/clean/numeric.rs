//! Range-checked numeric columns filled from a column statistic.

use super::config::Bounds;
use super::pipeline::{Stage, rewrite_column};
use super::report::StageChange;
use crate::schema::{Column, Dataset, format_decimal};

/// Statistic used to fill missing or out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillStatistic {
    Mean,
    Median,
}

/// Number precision kept by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precision {
    /// Rounded half-to-even when written, without a fraction.
    Whole,
    /// Written in shortest decimal form.
    Exact,
}

impl Precision {
    /// Render an in-range value or fill.
    ///
    /// A whole number that rounds past a bound (`65.5` ties to `66`) is held
    /// at the nearest whole number inside the bounds.
    fn render(&self, value: f64, bounds: Bounds) -> String {
        match self {
            Precision::Whole => {
                let whole = value
                    .round_ties_even()
                    .min(bounds.max.floor())
                    .max(bounds.min.ceil());
                format!("{}", whole as i64)
            }
            Precision::Exact => format_decimal(value),
        }
    }
}

/// Ages outside the bounds, unparseable or missing become the in-range mean.
///
/// The range check and the mean use the parsed values as read; kept ages
/// and the fill are rounded half-to-even only when written.
pub struct AgeNormalizer {
    bounds: Bounds,
}

impl AgeNormalizer {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl Stage for AgeNormalizer {
    fn name(&self) -> &'static str {
        "age"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        fill_numeric(
            self.name(),
            dataset,
            Column::Age,
            self.bounds,
            FillStatistic::Mean,
            Precision::Whole,
        )
    }
}

/// Salaries outside the bounds, unparseable or missing become the in-range median.
///
/// Fractional parts are kept.
pub struct SalaryNormalizer {
    bounds: Bounds,
}

impl SalaryNormalizer {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl Stage for SalaryNormalizer {
    fn name(&self) -> &'static str {
        "salary"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        fill_numeric(
            self.name(),
            dataset,
            Column::Salary,
            self.bounds,
            FillStatistic::Median,
            Precision::Exact,
        )
    }
}

/// Why a cell was not usable as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Missing,
    NotANumber,
    OutOfRange,
}

impl Rejection {
    fn reason(&self) -> &'static str {
        match self {
            Rejection::Missing => "missing",
            Rejection::NotANumber => "not a number",
            Rejection::OutOfRange => "out of range",
        }
    }
}

fn fill_numeric(
    stage: &'static str,
    dataset: &mut Dataset,
    column: Column,
    bounds: Bounds,
    statistic: FillStatistic,
    precision: Precision,
) -> StageChange {
    // The range filter runs before the statistic so rejected values never skew it.
    let parsed: Vec<Result<f64, Rejection>> = dataset
        .column_values(column)
        .map(|value| {
            let number = value
                .ok_or(Rejection::Missing)
                .and_then(|v| parse_number(v).ok_or(Rejection::NotANumber))?;
            if bounds.contains(number) {
                Ok(number)
            } else {
                Err(Rejection::OutOfRange)
            }
        })
        .collect();

    let accepted: Vec<f64> = parsed.iter().filter_map(|p| p.ok()).collect();
    let fill = match statistic {
        FillStatistic::Mean => mean(&accepted),
        FillStatistic::Median => median(&accepted),
    };
    let fill_value = fill.map(|v| precision.render(v, bounds));

    let label = match statistic {
        FillStatistic::Mean => "mean",
        FillStatistic::Median => "median",
    };
    let mut change = StageChange::new(stage, String::new()).with_column(column.header());

    let mut outcomes = parsed.into_iter();
    rewrite_column(dataset, column, &mut change, |_| match outcomes.next() {
        Some(Ok(number)) => (Some(precision.render(number, bounds)), "normalized number format"),
        Some(Err(rejection)) => (fill_value.clone(), rejection.reason()),
        None => (None, "missing"),
    });

    change.description = match &fill_value {
        Some(value) => format!(
            "Rewrote {} value(s), filling with {} {}",
            change.values_changed, label, value
        ),
        None => format!("No value in [{}, {}] to compute a {} from", bounds.min, bounds.max, label),
    };
    change.degenerate = fill_value.is_none() && !dataset.is_empty();
    change.fill_value = fill_value;
    change
}

/// Parse a numeric cell; surrounding whitespace is ignored, non-finite values rejected.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; an even count averages the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
