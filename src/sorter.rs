// 🔀 Date Sorter - Two-Group Ordering
// Dates in months with an 'r' come first, earliest to latest.
// Dates in May-August follow, latest to earliest.

use anyhow::{Context as AnyhowContext, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::SortError;
use crate::month::MonthGroup;

// ============================================================================
// STRATEGY & CONFIG
// ============================================================================

/// Algorithm used to build the ordering. Both produce identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Filter each group, sort it, concatenate
    #[default]
    TwoPass,
    /// Partition once, then sort both halves
    Partition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterConfig {
    #[serde(default)]
    pub strategy: SortStrategy,
}

// ============================================================================
// SORT FUNCTIONS
// ============================================================================

/// Sort dates: contains-r months ascending, then no-r months descending.
///
/// The input is left untouched and a new vector is returned.
///
/// ```
/// use chrono::NaiveDate;
/// use date_sorter::sort_dates;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let sorted = sort_dates(&[d(2004, 7, 1), d(2005, 1, 2), d(2007, 1, 1), d(2032, 5, 3)]);
/// assert_eq!(sorted, vec![d(2005, 1, 2), d(2007, 1, 1), d(2032, 5, 3), d(2004, 7, 1)]);
/// ```
pub fn sort_dates(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut with_r: Vec<NaiveDate> = dates
        .iter()
        .filter(|d| MonthGroup::of(d) == MonthGroup::ContainsR)
        .copied()
        .collect();
    with_r.sort_unstable();

    let mut without_r: Vec<NaiveDate> = dates
        .iter()
        .filter(|d| MonthGroup::of(d) == MonthGroup::NoR)
        .copied()
        .collect();
    without_r.sort_unstable_by(|a, b| b.cmp(a));

    debug!(
        total = dates.len(),
        contains_r = with_r.len(),
        no_r = without_r.len(),
        "two-pass sort"
    );

    with_r.extend(without_r);
    with_r
}

/// Same ordering as [`sort_dates`], classifying every date in a single pass
pub fn sort_dates_partitioned(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let (mut ascending, mut descending): (Vec<NaiveDate>, Vec<NaiveDate>) = dates
        .iter()
        .copied()
        .partition(|d| MonthGroup::of(d).is_ascending());

    ascending.sort_unstable();
    descending.sort_unstable_by(|a, b| b.cmp(a));

    debug!(
        total = dates.len(),
        contains_r = ascending.len(),
        no_r = descending.len(),
        "partition sort"
    );

    ascending.into_iter().chain(descending).collect()
}

/// Checked entry point: an absent sequence is rejected instead of read as empty
pub fn try_sort_dates(dates: Option<&[NaiveDate]>) -> Result<Vec<NaiveDate>, SortError> {
    dates
        .map(sort_dates)
        .ok_or_else(|| SortError::missing_input("dates"))
}

/// Check whether a sequence already follows the two-group ordering
pub fn is_sorted_by_rule(dates: &[NaiveDate]) -> bool {
    let split = dates
        .iter()
        .position(|d| MonthGroup::of(d) == MonthGroup::NoR)
        .unwrap_or(dates.len());
    let (head, tail) = dates.split_at(split);

    tail.iter().all(|d| MonthGroup::of(d) == MonthGroup::NoR)
        && head.windows(2).all(|w| w[0] <= w[1])
        && tail.windows(2).all(|w| w[0] >= w[1])
}

/// Count dates per group as (contains_r, no_r)
pub fn group_counts(dates: &[NaiveDate]) -> (usize, usize) {
    let with_r = dates
        .iter()
        .filter(|d| MonthGroup::of(d) == MonthGroup::ContainsR)
        .count();
    (with_r, dates.len() - with_r)
}

// ============================================================================
// DATE SORTER
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateSorter {
    strategy: SortStrategy,
}

impl DateSorter {
    /// Create a sorter using the default two-pass strategy
    pub fn new() -> Self {
        DateSorter::default()
    }

    pub fn with_strategy(strategy: SortStrategy) -> Self {
        DateSorter { strategy }
    }

    pub fn from_config(config: SorterConfig) -> Self {
        DateSorter::with_strategy(config.strategy)
    }

    /// Load sorter settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read sorter config: {:?}", path.as_ref()))?;

        let config: SorterConfig =
            serde_json::from_str(&content).context("Failed to parse sorter config JSON")?;

        Ok(DateSorter::from_config(config))
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Sort with the configured strategy
    pub fn sort(&self, dates: &[NaiveDate]) -> Vec<NaiveDate> {
        match self.strategy {
            SortStrategy::TwoPass => sort_dates(dates),
            SortStrategy::Partition => sort_dates_partitioned(dates),
        }
    }

    pub fn try_sort(&self, dates: Option<&[NaiveDate]>) -> Result<Vec<NaiveDate>, SortError> {
        dates
            .map(|d| self.sort(d))
            .ok_or_else(|| SortError::missing_input("dates"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
