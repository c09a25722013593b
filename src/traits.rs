//! Service trait definitions with mockall annotations for testing
//!
//! The data source and the three presentation surfaces are external
//! collaborators. The controller only ever talks to them through these
//! traits, which keeps the core testable with injected mocks.

use crate::error::DashboardResult;
use crate::types::{DistributionSet, JobRecord};

/// Remote job data source.
///
/// `fetch_filtered` and `fetch_analytics` are deliberately separate calls:
/// the analytics endpoint may return a differently-shaped record set for the
/// same term, and the controller must not assume the two are identical.
#[mockall::automock]
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    /// Retrieve the full dataset.
    async fn fetch_all(&self) -> DashboardResult<Vec<JobRecord>>;

    /// Retrieve the list/map dataset for a search term.
    async fn fetch_filtered(&self, term: &str) -> DashboardResult<Vec<JobRecord>>;

    /// Retrieve the analytics dataset for a search term.
    async fn fetch_analytics(&self, term: &str) -> DashboardResult<Vec<JobRecord>>;
}

/// Sortable tabular list surface.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ListPort: Send + Sync {
    /// Tabulate a record sequence.
    async fn render(&self, records: Vec<JobRecord>) -> DashboardResult<()>;

    /// Show an error state in place of the table.
    async fn render_error(&self, message: &str) -> DashboardResult<()>;

    /// Show a loading state while a request is in flight.
    async fn render_loading(&self) -> DashboardResult<()>;
}

/// Geographic marker surface. Records lacking coordinates are simply not
/// plotted; that is the port implementation's concern.
#[mockall::automock]
#[async_trait::async_trait]
pub trait MapPort: Send + Sync {
    async fn render(&self, records: Vec<JobRecord>) -> DashboardResult<()>;

    async fn render_error(&self, message: &str) -> DashboardResult<()>;

    async fn render_loading(&self) -> DashboardResult<()>;
}

/// Statistical charts surface, fed all six distributions as one unit.
#[mockall::automock]
#[async_trait::async_trait]
pub trait StatsPort: Send + Sync {
    async fn render(&self, distributions: DistributionSet) -> DashboardResult<()>;

    async fn render_error(&self, message: &str) -> DashboardResult<()>;
}
