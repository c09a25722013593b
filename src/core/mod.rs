//! Pure core logic: aggregation reducers and record sorting.
//!
//! Nothing in this module suspends, touches view state, or performs I/O.

pub mod aggregate;
pub mod sort;

pub use aggregate::{
    aggregate_all, day_of_week_distribution, education_distribution, language_distribution,
    quarterly_trend_distribution, salary_band_distribution, salary_histogram_distribution,
};
pub use sort::sort_records;
