//! Test helpers: recording port fakes and a configurable job source stub.
//!
//! The recording ports capture every render so tests can assert on exactly
//! what reached each surface and in what order. The stub source supports
//! per-term delays and failures, which is what the generation-guard tests
//! need (mockall expectations cannot suspend mid-call).

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jobdash::{
    DashboardController, DashboardError, DashboardResult, DistributionSet, JobRecord, JobSource,
    ListPort, MapPort, StatsPort,
};

/// List port that records every call, including the order in which renders,
/// errors, and loading states landed. An optional loading delay makes the
/// loading render a suspension point, which the staleness tests need.
#[derive(Clone, Default)]
pub struct RecordingListPort {
    renders: Arc<Mutex<Vec<Vec<JobRecord>>>>,
    errors: Arc<Mutex<Vec<String>>>,
    loading: Arc<AtomicUsize>,
    events: Arc<Mutex<Vec<String>>>,
    loading_delay: Option<Duration>,
}

impl RecordingListPort {
    /// Make every loading render suspend for `delay` before it lands.
    /// Configure before cloning the port into a controller.
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = Some(delay);
        self
    }

    pub fn renders(&self) -> Vec<Vec<JobRecord>> {
        self.renders.lock().unwrap().clone()
    }

    pub fn last_render(&self) -> Option<Vec<JobRecord>> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn loading_count(&self) -> usize {
        self.loading.load(Ordering::Relaxed)
    }

    /// Applied list updates in arrival order: "loading", "error", or
    /// "render:<first title>".
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListPort for RecordingListPort {
    async fn render(&self, records: Vec<JobRecord>) -> DashboardResult<()> {
        let first_title = records
            .first()
            .map(|job| job.title.clone())
            .unwrap_or_else(|| "empty".to_string());
        self.events.lock().unwrap().push(format!("render:{first_title}"));
        self.renders.lock().unwrap().push(records);
        Ok(())
    }

    async fn render_error(&self, message: &str) -> DashboardResult<()> {
        self.events.lock().unwrap().push("error".to_string());
        self.errors.lock().unwrap().push(message.to_string());
        Ok(())
    }

    async fn render_loading(&self) -> DashboardResult<()> {
        if let Some(delay) = self.loading_delay {
            tokio::time::sleep(delay).await;
        }
        self.events.lock().unwrap().push("loading".to_string());
        self.loading.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Map port that records every call.
#[derive(Clone, Default)]
pub struct RecordingMapPort {
    renders: Arc<Mutex<Vec<Vec<JobRecord>>>>,
    errors: Arc<Mutex<Vec<String>>>,
    loading: Arc<AtomicUsize>,
}

impl RecordingMapPort {
    pub fn renders(&self) -> Vec<Vec<JobRecord>> {
        self.renders.lock().unwrap().clone()
    }

    pub fn last_render(&self) -> Option<Vec<JobRecord>> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn loading_count(&self) -> usize {
        self.loading.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MapPort for RecordingMapPort {
    async fn render(&self, records: Vec<JobRecord>) -> DashboardResult<()> {
        self.renders.lock().unwrap().push(records);
        Ok(())
    }

    async fn render_error(&self, message: &str) -> DashboardResult<()> {
        self.errors.lock().unwrap().push(message.to_string());
        Ok(())
    }

    async fn render_loading(&self) -> DashboardResult<()> {
        self.loading.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Stats port that records every distribution set it is handed.
#[derive(Clone, Default)]
pub struct RecordingStatsPort {
    renders: Arc<Mutex<Vec<DistributionSet>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl RecordingStatsPort {
    pub fn renders(&self) -> Vec<DistributionSet> {
        self.renders.lock().unwrap().clone()
    }

    pub fn last_render(&self) -> Option<DistributionSet> {
        self.renders.lock().unwrap().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsPort for RecordingStatsPort {
    async fn render(&self, distributions: DistributionSet) -> DashboardResult<()> {
        self.renders.lock().unwrap().push(distributions);
        Ok(())
    }

    async fn render_error(&self, message: &str) -> DashboardResult<()> {
        self.errors.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Configurable job source: canned datasets per term, optional per-term
/// delays (both legs of a term share the delay), optional failures.
/// Analytics falls back to the filtered dataset unless overridden.
#[derive(Clone, Default)]
pub struct StubJobSource {
    all_jobs: Vec<JobRecord>,
    filtered: HashMap<String, Vec<JobRecord>>,
    analytics: HashMap<String, Vec<JobRecord>>,
    delays: HashMap<String, Duration>,
    failing_filtered: HashSet<String>,
    failing_analytics: HashSet<String>,
    fail_all: bool,
}

impl StubJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all_jobs(mut self, jobs: Vec<JobRecord>) -> Self {
        self.all_jobs = jobs;
        self
    }

    pub fn with_filtered(mut self, term: &str, jobs: Vec<JobRecord>) -> Self {
        self.filtered.insert(term.to_string(), jobs);
        self
    }

    pub fn with_analytics(mut self, term: &str, jobs: Vec<JobRecord>) -> Self {
        self.analytics.insert(term.to_string(), jobs);
        self
    }

    pub fn with_delay(mut self, term: &str, delay: Duration) -> Self {
        self.delays.insert(term.to_string(), delay);
        self
    }

    pub fn failing_filtered_for(mut self, term: &str) -> Self {
        self.failing_filtered.insert(term.to_string());
        self
    }

    pub fn failing_analytics_for(mut self, term: &str) -> Self {
        self.failing_analytics.insert(term.to_string());
        self
    }

    pub fn failing_all(mut self) -> Self {
        self.fail_all = true;
        self
    }

    async fn wait_for(&self, term: &str) {
        if let Some(delay) = self.delays.get(term) {
            tokio::time::sleep(*delay).await;
        }
    }

    fn failure(endpoint: String) -> DashboardError {
        DashboardError::FetchFailed {
            endpoint,
            message: "stub failure".to_string(),
        }
    }
}

#[async_trait]
impl JobSource for StubJobSource {
    async fn fetch_all(&self) -> DashboardResult<Vec<JobRecord>> {
        if self.fail_all {
            return Err(Self::failure("jobs".to_string()));
        }
        Ok(self.all_jobs.clone())
    }

    async fn fetch_filtered(&self, term: &str) -> DashboardResult<Vec<JobRecord>> {
        self.wait_for(term).await;
        if self.failing_filtered.contains(term) {
            return Err(Self::failure(format!("jobs/search/{term}")));
        }
        Ok(self.filtered.get(term).cloned().unwrap_or_default())
    }

    async fn fetch_analytics(&self, term: &str) -> DashboardResult<Vec<JobRecord>> {
        self.wait_for(term).await;
        if self.failing_analytics.contains(term) {
            return Err(Self::failure(format!("jobs/analytics/{term}")));
        }
        Ok(self
            .analytics
            .get(term)
            .or_else(|| self.filtered.get(term))
            .cloned()
            .unwrap_or_default())
    }
}

/// Build a controller over a stub source and recording ports, handing back
/// port clones for assertions.
pub fn recording_controller(
    source: StubJobSource,
) -> (
    DashboardController<StubJobSource, RecordingListPort, RecordingMapPort, RecordingStatsPort>,
    RecordingListPort,
    RecordingMapPort,
    RecordingStatsPort,
) {
    let list = RecordingListPort::default();
    let map = RecordingMapPort::default();
    let stats = RecordingStatsPort::default();
    let controller =
        DashboardController::new(source, list.clone(), map.clone(), stats.clone());
    (controller, list, map, stats)
}
