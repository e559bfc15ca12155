//! Day-first date parsing and the joining date stage.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::pipeline::{Stage, rewrite_column};
use super::report::StageChange;
use crate::schema::{Column, Dataset};

// A time of day (with optional seconds, fraction, meridiem and offset) trailing the date.
static TRAILING_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:T|\s+)\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?\s*(?:[ap]\.?m\.?)?\s*(?:z|utc|gmt|[+-]\d{2}:?\d{2})?\z",
    )
    .unwrap()
});

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,/.\-]+").unwrap());

static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\A(\d{1,2})(?:st|nd|rd|th)\z").unwrap());

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: [&str; 7] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// A date token after splitting on separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Month(u32),
}

/// Parse a date, preferring day-before-month when the order is ambiguous.
///
/// Year-first numeric forms (`2020-04-03`, `2020/04/03`, `20200403`) read as
/// year, month, day. Other numeric forms read as day, month, year, falling
/// back to month, day, year only when the day-first reading is not a real
/// date. Month names may appear anywhere; a trailing time is ignored.
/// Two-digit years map 00-68 to 20xx and 69-99 to 19xx.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = TRAILING_TIME.replace(trimmed, "");
    let date_part = date_part.trim();

    if date_part.len() == 8 && date_part.bytes().all(|b| b.is_ascii_digit()) {
        return ymd(&date_part[..4], &date_part[4..6], &date_part[6..]);
    }

    let tokens: Vec<Token> = SEPARATORS
        .split(date_part)
        .filter(|t| !t.is_empty())
        .filter(|t| !is_weekday(t))
        .map(classify)
        .collect::<Option<_>>()?;

    if tokens.len() != 3 {
        return None;
    }

    let month_positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| matches!(t, Token::Month(_)))
        .map(|(i, _)| i)
        .collect();

    match month_positions.as_slice() {
        [] => resolve_numeric(&tokens),
        [pos] => resolve_named(&tokens, *pos),
        _ => None,
    }
}

fn classify(token: &str) -> Option<Token<'_>> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Token::Number(token));
    }
    if let Some(caps) = ORDINAL.captures(token) {
        return caps.get(1).map(|m| Token::Number(m.as_str()));
    }
    month_number(token).map(Token::Month)
}

fn month_number(token: &str) -> Option<u32> {
    let lower = token.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&lower))
        .map(|i| i as u32 + 1)
}

fn is_weekday(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.len() >= 3 && WEEKDAYS.iter().any(|d| d.starts_with(&lower))
}

fn resolve_numeric(tokens: &[Token]) -> Option<NaiveDate> {
    let [Token::Number(a), Token::Number(b), Token::Number(c)] = tokens else {
        return None;
    };

    if a.len() == 4 {
        return ymd(a, b, c);
    }

    ymd(c, b, a).or_else(|| ymd(c, a, b))
}

fn resolve_named(tokens: &[Token], month_pos: usize) -> Option<NaiveDate> {
    let Token::Month(month) = tokens[month_pos] else {
        return None;
    };
    let numbers: Vec<&str> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Number(n) => Some(*n),
            Token::Month(_) => None,
        })
        .collect();
    let [first, second] = numbers.as_slice() else {
        return None;
    };

    let (day, year) = if first.len() == 4 {
        (*second, *first)
    } else {
        (*first, *second)
    };

    NaiveDate::from_ymd_opt(parse_year(year)?, month, day.parse().ok()?)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if month.len() > 2 || day.len() > 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(parse_year(year)?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_year(year: &str) -> Option<i32> {
    let n: i32 = year.parse().ok()?;
    match year.len() {
        1 | 2 if n < 69 => Some(2000 + n),
        1 | 2 => Some(1900 + n),
        4 => Some(n),
        _ => None,
    }
}

/// Rewrites JoiningDate as `YYYY-MM-DD`; unparseable or missing dates become the sentinel.
pub struct DateNormalizer {
    sentinel: NaiveDate,
}

impl DateNormalizer {
    pub fn new(sentinel: NaiveDate) -> Self {
        Self { sentinel }
    }
}

impl Stage for DateNormalizer {
    fn name(&self) -> &'static str {
        "joining_date"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        let sentinel = self.sentinel.format("%Y-%m-%d").to_string();
        let mut change =
            StageChange::new(self.name(), String::new()).with_column(Column::JoiningDate.header());

        rewrite_column(dataset, Column::JoiningDate, &mut change, |v| match v {
            Some(raw) => match parse_day_first(raw) {
                Some(date) => (Some(date.format("%Y-%m-%d").to_string()), "reformatted date"),
                None => (Some(sentinel.clone()), "unparseable date"),
            },
            None => (Some(sentinel.clone()), "missing"),
        });

        change.description = format!("Normalized {} joining date(s)", change.values_changed);
        change.fill_value = Some(sentinel);
        change
    }
}
