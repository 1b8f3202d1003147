// Date Sorter - Core Library
// Exposes the month classifier and the two-group date ordering

pub mod error;
pub mod month;
pub mod sorter;

// Re-export commonly used types
pub use error::SortError;
pub use month::{month_name, name_contains_r, MonthGroup};
pub use sorter::{
    DateSorter, SortStrategy, SorterConfig,
    sort_dates, sort_dates_partitioned, try_sort_dates,
    is_sorted_by_rule, group_counts,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
