//! Sort engine
//!
//! Stateless, comparator-based reordering of a record sequence by a chosen
//! column and direction. Toggle bookkeeping lives in `ViewState`, not here.

use std::cmp::Ordering;

use crate::types::{JobRecord, SortColumn, SortDirection};

/// Sort records by the given column and direction using a stable sort.
///
/// Text columns compare case-insensitively. Absent salaries order before any
/// numeric salary, so they come first when ascending.
pub fn sort_records(
    mut records: Vec<JobRecord>,
    column: SortColumn,
    direction: SortDirection,
) -> Vec<JobRecord> {
    records.sort_by(|a, b| {
        let ordering = compare_by_column(a, b, column);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}

fn compare_by_column(a: &JobRecord, b: &JobRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => compare_text(&a.title, &b.title),
        SortColumn::Location => compare_text(&a.location, &b.location),
        SortColumn::Salary => a.salary.cmp(&b.salary),
        SortColumn::Employer => compare_text(&a.employer_name, &b.employer_name),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
