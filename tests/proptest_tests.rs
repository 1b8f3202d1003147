//! Property-based tests for the two-group date ordering
//!
//! These tests use proptest to check the ordering invariants across many random inputs.

use chrono::NaiveDate;
use date_sorter::{is_sorted_by_rule, sort_dates, sort_dates_partitioned, MonthGroup};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn dates_in_months(months: &'static [u32]) -> impl Strategy<Value = Vec<NaiveDate>> {
    prop::collection::vec(
        (1900i32..2100, prop::sample::select(months), 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        0..40,
    )
}

const WITH_R: &[u32] = &[1, 2, 3, 4, 9, 10, 11, 12];
const WITHOUT_R: &[u32] = &[5, 6, 7, 8];

proptest! {
    #[test]
    fn output_is_permutation_of_input(dates in prop::collection::vec(any_date(), 0..60)) {
        let mut sorted = sort_dates(&dates);
        let mut original = dates.clone();

        sorted.sort();
        original.sort();
        prop_assert_eq!(sorted, original);
    }

    #[test]
    fn groups_are_placed_and_ordered(dates in prop::collection::vec(any_date(), 0..60)) {
        let sorted = sort_dates(&dates);
        let split = sorted
            .iter()
            .position(|d| MonthGroup::of(d) == MonthGroup::NoR)
            .unwrap_or(sorted.len());
        let (head, tail) = sorted.split_at(split);

        prop_assert!(tail.iter().all(|d| MonthGroup::of(d) == MonthGroup::NoR));
        prop_assert!(head.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(tail.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(is_sorted_by_rule(&sorted));
    }

    #[test]
    fn sorting_twice_changes_nothing(dates in prop::collection::vec(any_date(), 0..60)) {
        let once = sort_dates(&dates);
        let twice = sort_dates(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn both_strategies_agree(dates in prop::collection::vec(any_date(), 0..60)) {
        prop_assert_eq!(sort_dates(&dates), sort_dates_partitioned(&dates));
    }

    #[test]
    fn only_no_r_months_sort_descending(dates in dates_in_months(WITHOUT_R)) {
        let mut expected = dates.clone();
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(sort_dates(&dates), expected);
    }

    #[test]
    fn only_r_months_sort_ascending(dates in dates_in_months(WITH_R)) {
        let mut expected = dates.clone();
        expected.sort();
        prop_assert_eq!(sort_dates(&dates), expected);
    }

    #[test]
    fn single_date_is_unchanged(date in any_date()) {
        prop_assert_eq!(sort_dates(&[date]), vec![date]);
    }
}
