// 📅 Month Classifier
// Splits the twelve months into two groups by whether the English name contains an 'r'
//
// Names come from a fixed table so the result never depends on the host locale.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// MONTH NAMES
// ============================================================================

/// English month names, indexed by zero-based month
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of the month a date falls in
pub fn month_name(date: &NaiveDate) -> &'static str {
    // month0() is always 0..=11
    MONTH_NAMES[date.month0() as usize]
}

/// Case-insensitive check for an 'r' in a month name
pub fn name_contains_r(name: &str) -> bool {
    name.chars().any(|c| c.eq_ignore_ascii_case(&'r'))
}

// ============================================================================
// MONTH GROUP
// ============================================================================

/// Which half of the ordering a date belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthGroup {
    /// January-April, September-December: sorted ascending, placed first
    ContainsR,
    /// May-August: sorted descending, placed last
    NoR,
}

impl MonthGroup {
    /// Classify a date by its month name
    pub fn of(date: &NaiveDate) -> Self {
        Self::from_name(month_name(date))
    }

    /// Classify a chrono month
    pub fn of_month(month: Month) -> Self {
        Self::from_name(month.name())
    }

    fn from_name(name: &str) -> Self {
        if name_contains_r(name) {
            MonthGroup::ContainsR
        } else {
            MonthGroup::NoR
        }
    }

    /// Whether dates in this group are sorted earliest first
    pub fn is_ascending(&self) -> bool {
        matches!(self, MonthGroup::ContainsR)
    }
}

// ============================================================================
// TESTS
// ============================================================================
