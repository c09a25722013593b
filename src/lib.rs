//! Job dashboard core
//!
//! Reduces job-posting records into fixed-category distributions and keeps
//! three presentation surfaces (a sortable list, a geographic marker layer,
//! and the statistics charts) consistent across overlapping asynchronous
//! filter requests. Data sources and renderers are injected through traits;
//! the aggregation and sort engines are pure functions.

pub mod controller;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use controller::DashboardController;
pub use error::{DashboardError, DashboardResult};
pub use state::ViewState;
pub use traits::{JobSource, ListPort, MapPort, StatsPort};
pub use types::{Distribution, DistributionSet, JobRecord, SortColumn, SortDirection};
