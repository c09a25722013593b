//! View state management
//!
//! Pure state for the view-synchronization controller: the cached full
//! record set, the currently visible set, sort bookkeeping, the active
//! search term, and the request generation counter that arbitrates
//! staleness. Testable without any I/O.

use crate::types::{JobRecord, SortColumn, SortDirection};

/// Conceptual tuple (full set, visible set, sort column, sort direction,
/// search term, generation). Mutated only by the controller.
#[derive(Debug, Default)]
pub struct ViewState {
    all_jobs: Vec<JobRecord>,
    visible_jobs: Vec<JobRecord>,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    search_term: String,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new filter request: bump the generation and record the term.
    /// The returned generation tags the request's outgoing fetches.
    pub fn next_generation(&mut self, term: &str) -> u64 {
        self.generation += 1;
        self.search_term = term.to_string();
        self.generation
    }

    /// Whether a response tagged with `generation` is still the latest
    /// request. Stale responses must be dropped without partial application.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Cache the full dataset and make it the visible set.
    pub fn cache_full_set(&mut self, jobs: Vec<JobRecord>) {
        self.visible_jobs = jobs.clone();
        self.all_jobs = jobs;
    }

    /// Restore the cached full set as the visible set, returning a copy for
    /// rendering.
    pub fn restore_full_set(&mut self) -> Vec<JobRecord> {
        self.visible_jobs = self.all_jobs.clone();
        self.visible_jobs.clone()
    }

    pub fn set_visible(&mut self, jobs: Vec<JobRecord>) {
        self.visible_jobs = jobs;
    }

    pub fn full_set(&self) -> &[JobRecord] {
        &self.all_jobs
    }

    pub fn visible(&self) -> &[JobRecord] {
        &self.visible_jobs
    }

    /// Sort-toggle bookkeeping: re-sorting the same column flips the
    /// direction, a new column resets to ascending. Returns the direction
    /// to sort with.
    pub fn toggle_sort(&mut self, column: SortColumn) -> SortDirection {
        if self.sort_column == Some(column) {
            self.sort_direction = self.sort_direction.toggle();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Ascending;
        }
        self.sort_direction
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
