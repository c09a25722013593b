//! HTTP implementation of the job data source

use async_trait::async_trait;
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::traits::JobSource;
use crate::types::JobRecord;

/// Job source backed by the jobs HTTP API.
pub struct HttpJobSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_jobs(&self, path: &str) -> DashboardResult<Vec<JobRecord>> {
        let endpoint = self.endpoint(path);
        debug!(%endpoint, "fetching jobs");

        let response = self.client.get(&endpoint).send().await?;
        if !response.status().is_success() {
            return Err(DashboardError::FetchFailed {
                endpoint,
                message: format!("HTTP status {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_all(&self) -> DashboardResult<Vec<JobRecord>> {
        self.get_jobs("jobs").await
    }

    async fn fetch_filtered(&self, term: &str) -> DashboardResult<Vec<JobRecord>> {
        self.get_jobs(&format!("jobs/search/{term}")).await
    }

    async fn fetch_analytics(&self, term: &str) -> DashboardResult<Vec<JobRecord>> {
        self.get_jobs(&format!("jobs/analytics/{term}")).await
    }
}
