//! Email and phone validation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::pipeline::{Stage, rewrite_column};
use super::report::StageChange;
use crate::schema::{Column, Dataset};

// Anchored at both ends: trailing content after a valid address is rejected.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[\w.-]+@[\w.-]+\.\w+\z").unwrap());

/// Whether `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Whether `value` is exactly ten ASCII digits.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Replaces emails that fail [`is_valid_email`] with the unknown token.
///
/// Valid addresses pass through byte-for-byte.
pub struct EmailValidator {
    unknown: String,
}

impl EmailValidator {
    pub fn new(unknown: impl Into<String>) -> Self {
        Self {
            unknown: unknown.into(),
        }
    }
}

impl Stage for EmailValidator {
    fn name(&self) -> &'static str {
        "email"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        let mut change = StageChange::new(self.name(), String::new()).with_column(Column::Email.header());
        rewrite_column(dataset, Column::Email, &mut change, |v| match v {
            Some(email) if is_valid_email(email) => (Some(email.to_string()), "valid"),
            Some(_) => (Some(self.unknown.clone()), "invalid email"),
            None => (Some(self.unknown.clone()), "missing"),
        });
        change.description = format!("Replaced {} invalid email(s)", change.values_changed);
        change
    }
}

/// Replaces phones that fail [`is_valid_phone`] with the unknown token.
pub struct PhoneValidator {
    unknown: String,
}

impl PhoneValidator {
    pub fn new(unknown: impl Into<String>) -> Self {
        Self {
            unknown: unknown.into(),
        }
    }
}

impl Stage for PhoneValidator {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn apply(&self, dataset: &mut Dataset) -> StageChange {
        let mut change = StageChange::new(self.name(), String::new()).with_column(Column::Phone.header());
        rewrite_column(dataset, Column::Phone, &mut change, |v| match v {
            Some(phone) if is_valid_phone(phone) => (Some(phone.to_string()), "valid"),
            Some(_) => (Some(self.unknown.clone()), "not ten digits"),
            None => (Some(self.unknown.clone()), "missing"),
        });
        change.description = format!("Replaced {} invalid phone number(s)", change.values_changed);
        change
    }
}
