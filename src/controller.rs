//! View-synchronization controller
//!
//! Orchestrates filter/search requests across the three presentation ports
//! using dependency injection: the data source and the ports are injected as
//! trait implementations, and all view state lives behind one async lock.
//!
//! Every `filter` call bumps the generation counter and tags its outgoing
//! fetches with it. A response is applied to its ports only while its
//! generation is still the latest; superseded responses are dropped whole.
//! There is no true cancellation: in-flight requests run to completion and
//! their responses are discarded at the generation check.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::core::{aggregate_all, sort_records};
use crate::error::{DashboardError, DashboardResult};
use crate::state::ViewState;
use crate::traits::{JobSource, ListPort, MapPort, StatsPort};
use crate::types::SortColumn;

/// Controller instance owning its view state. Multiple independent
/// controllers can coexist (each test gets its own) because nothing here is
/// module-global.
pub struct DashboardController<J, L, M, S>
where
    J: JobSource,
    L: ListPort,
    M: MapPort,
    S: StatsPort,
{
    state: Arc<Mutex<ViewState>>,
    source: J,
    list: L,
    map: M,
    stats: S,
}

impl<J, L, M, S> DashboardController<J, L, M, S>
where
    J: JobSource,
    L: ListPort,
    M: MapPort,
    S: StatsPort,
{
    pub fn new(source: J, list: L, map: M, stats: S) -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState::new())),
            source,
            list,
            map,
            stats,
        }
    }

    /// Fetch the full dataset, cache it, and render all three surfaces.
    ///
    /// A fetch failure surfaces as error states on the list and map ports;
    /// the controller stays usable for subsequent requests either way.
    pub async fn load(&self) -> DashboardResult<()> {
        self.show_loading().await;

        match self.source.fetch_all().await {
            Ok(jobs) => {
                info!(count = jobs.len(), "full dataset loaded");
                let distributions = aggregate_all(&jobs);

                let mut state = self.state.lock().await;
                state.cache_full_set(jobs.clone());

                if let Err(e) = self.list.render(jobs.clone()).await {
                    warn!("list render failed: {e}");
                }
                if let Err(e) = self.map.render(jobs).await {
                    warn!("map render failed: {e}");
                }
                if let Err(e) = self.stats.render(distributions).await {
                    warn!("stats render failed: {e}");
                }
                Ok(())
            }
            Err(e) => {
                error!("failed to load jobs: {e}");
                let message = e.to_string();
                if let Err(e) = self.list.render_error(&message).await {
                    warn!("list error render failed: {e}");
                }
                if let Err(e) = self.map.render_error(&message).await {
                    warn!("map error render failed: {e}");
                }
                Err(e)
            }
        }
    }

    /// Handle a filter/search request.
    ///
    /// An empty term restores the Unfiltered state from the cached full set
    /// without network traffic. A non-empty term issues two independent
    /// fetches, the list/map set and the analytics set, and applies each
    /// to its ports as soon as it arrives, provided its generation is still
    /// current. List and map always update together; the stats update lands
    /// independently. Fetch failures become port error states and never
    /// escape this method.
    pub async fn filter(&self, term: &str) {
        if term.is_empty() {
            let mut state = self.state.lock().await;
            let generation = state.next_generation(term);
            info!(generation, "restoring unfiltered view");

            let jobs = state.restore_full_set();
            let distributions = aggregate_all(&jobs);
            if let Err(e) = self.list.render(jobs.clone()).await {
                warn!("list render failed: {e}");
            }
            if let Err(e) = self.map.render(jobs).await {
                warn!("map render failed: {e}");
            }
            if let Err(e) = self.stats.render(distributions).await {
                warn!("stats render failed: {e}");
            }
            return;
        }

        // Bump the generation and render the loading states under one lock
        // acquisition: a loading render that suspends must not be able to
        // land after a newer generation has already applied its results.
        let generation = {
            let mut state = self.state.lock().await;
            let generation = state.next_generation(term);
            info!(%term, generation, "filter request issued");
            self.show_loading().await;
            generation
        };

        tokio::join!(
            self.run_list_leg(term, generation),
            self.run_analytics_leg(term, generation),
        );
    }

    /// Re-sort the visible set by a column, toggling direction on repeat
    /// invocations, and re-render the list surface.
    pub async fn sort_by(&self, column: SortColumn) {
        let mut state = self.state.lock().await;
        let direction = state.toggle_sort(column);
        let sorted = sort_records(state.visible().to_vec(), column, direction);
        state.set_visible(sorted.clone());

        if let Err(e) = self.list.render(sorted).await {
            warn!("list render failed: {e}");
        }
    }

    /// List/map leg of a filter request: fetch the list dataset and apply
    /// it to the list and map ports as one unit.
    async fn run_list_leg(&self, term: &str, generation: u64) {
        match self.source.fetch_filtered(term).await {
            Ok(jobs) => {
                // Generation check and application happen under one lock
                // acquisition so a stale leg cannot interleave its renders
                // past a newer one.
                let mut state = self.state.lock().await;
                if !state.is_current(generation) {
                    warn!(%term, generation, "dropping superseded list response");
                    return;
                }
                state.set_visible(jobs.clone());

                if let Err(e) = self.list.render(jobs.clone()).await {
                    warn!("list render failed: {e}");
                }
                if let Err(e) = self.map.render(jobs).await {
                    warn!("map render failed: {e}");
                }
            }
            Err(e) => {
                let state = self.state.lock().await;
                if !state.is_current(generation) {
                    warn!(%term, generation, "dropping superseded list failure");
                    return;
                }
                error!(%term, "list fetch failed: {e}");
                self.render_list_failure(&e).await;
            }
        }
    }

    /// Analytics leg of a filter request: fetch the (possibly
    /// differently-shaped) analytics dataset, reduce it, and apply the
    /// distributions to the stats port.
    async fn run_analytics_leg(&self, term: &str, generation: u64) {
        match self.source.fetch_analytics(term).await {
            Ok(jobs) => {
                let distributions = aggregate_all(&jobs);

                let state = self.state.lock().await;
                if !state.is_current(generation) {
                    warn!(%term, generation, "dropping superseded analytics response");
                    return;
                }

                if let Err(e) = self.stats.render(distributions).await {
                    warn!("stats render failed: {e}");
                }
            }
            Err(e) => {
                let state = self.state.lock().await;
                if !state.is_current(generation) {
                    warn!(%term, generation, "dropping superseded analytics failure");
                    return;
                }
                error!(%term, "analytics fetch failed: {e}");
                if let Err(e) = self.stats.render_error(&e.to_string()).await {
                    warn!("stats error render failed: {e}");
                }
            }
        }
    }

    async fn show_loading(&self) {
        if let Err(e) = self.list.render_loading().await {
            warn!("list loading render failed: {e}");
        }
        if let Err(e) = self.map.render_loading().await {
            warn!("map loading render failed: {e}");
        }
    }

    async fn render_list_failure(&self, error: &DashboardError) {
        let message = error.to_string();
        if let Err(e) = self.list.render_error(&message).await {
            warn!("list error render failed: {e}");
        }
        if let Err(e) = self.map.render_error(&message).await {
            warn!("map error render failed: {e}");
        }
    }

    // Accessors for tests and the binary's status output.

    pub async fn generation(&self) -> u64 {
        self.state.lock().await.generation()
    }

    pub async fn search_term(&self) -> String {
        self.state.lock().await.search_term().to_string()
    }

    pub async fn visible_jobs(&self) -> Vec<crate::types::JobRecord> {
        self.state.lock().await.visible().to_vec()
    }
}
