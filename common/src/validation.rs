//! Validation rules of the advanced search form.
//!
//! A text input is either empty or at least [`MIN_TEXT_LENGTH`] characters
//! long. A date is a year within the allowed date range; a date range is
//! two such years, the first not after the second.

use serde::{Deserialize, Serialize};

use crate::search_const::{DEFAULT_ALLOWED_DATE_RANGE, MIN_TEXT_LENGTH};

pub const TEXT_VALIDATOR_MESSAGE: &str = "La valeur entrée doit comporter au moins 3 caractères.";

/// Inclusive bounds of the years a date filter may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedDateRange {
    pub min: i32,
    pub max: i32,
}

impl Default for AllowedDateRange {
    fn default() -> Self {
        let (min, max) = DEFAULT_ALLOWED_DATE_RANGE;
        Self { min, max }
    }
}

impl AllowedDateRange {
    /// Build from two bounds in any order. An empty list falls back to the
    /// default range.
    pub fn from_bounds(bounds: &[i32]) -> Self {
        match (bounds.iter().min(), bounds.iter().max()) {
            (Some(&min), Some(&max)) => Self { min, max },
            _ => Self::default(),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

pub fn validate_text(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.chars().count() >= MIN_TEXT_LENGTH
}

pub fn validate_text_list(texts: &[String]) -> bool {
    texts.iter().all(|text| validate_text(text))
}

fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

/// An empty date is valid; it is ignored when the query is built.
pub fn validate_date(text: &str, allowed: &AllowedDateRange) -> bool {
    text.trim().is_empty() || parse_year(text).is_some_and(|year| allowed.contains(year))
}

pub fn validate_date_range(start: &str, end: &str, allowed: &AllowedDateRange) -> bool {
    if start.trim().is_empty() && end.trim().is_empty() {
        return true;
    }
    match (parse_year(start), parse_year(end)) {
        (Some(start), Some(end)) => allowed.contains(start) && allowed.contains(end) && start <= end,
        _ => false,
    }
}

pub fn date_validator_message(allowed: &AllowedDateRange) -> String {
    format!(
        "La date doit être au format 'AAAA' et comprise entre {} et {}",
        allowed.min, allowed.max
    )
}

pub fn date_range_validator_message(allowed: &AllowedDateRange) -> String {
    format!(
        "La tranche de dates doit être composée de deux dates au format 'AAAA', comprises entre {} et {}",
        allowed.min, allowed.max
    )
}
