//! Console implementations of the three presentation ports

use async_trait::async_trait;

use crate::error::DashboardResult;
use crate::traits::{ListPort, MapPort, StatsPort};
use crate::types::{DistributionSet, JobRecord};

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut shortened: String = value.chars().take(width.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    }
}

/// Tabular list rendered to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleListPort;

#[async_trait]
impl ListPort for ConsoleListPort {
    async fn render(&self, records: Vec<JobRecord>) -> DashboardResult<()> {
        let count = records.len();
        println!("{} job{} found", count, if count == 1 { "" } else { "s" });

        if records.is_empty() {
            println!("No jobs found matching your search.");
            return Ok(());
        }

        println!(
            "{:<40} {:<22} {:>12}  {}",
            "Job Title", "Location", "Salary", "Company"
        );
        for job in &records {
            let salary = job
                .salary
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Not specified".to_string());
            println!(
                "{:<40} {:<22} {:>12}  {}",
                truncate(&job.title, 40),
                truncate(&job.location, 22),
                salary,
                job.employer_name
            );
        }
        Ok(())
    }

    async fn render_error(&self, message: &str) -> DashboardResult<()> {
        println!("⚠️  {message}");
        println!("Failed to load jobs. Please try again later or check if the API server is running.");
        Ok(())
    }

    async fn render_loading(&self) -> DashboardResult<()> {
        println!("Loading jobs...");
        Ok(())
    }
}

/// Marker layer rendered as one line per located record.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMapPort;

impl ConsoleMapPort {
    /// One marker line per record carrying coordinates; records lacking
    /// coordinates are simply not plotted.
    pub fn marker_lines(records: &[JobRecord]) -> Vec<String> {
        records
            .iter()
            .filter_map(|job| {
                job.coordinates().map(|(lat, lon)| {
                    format!("[{lat:.4}, {lon:.4}] {} - {}", job.title, job.location)
                })
            })
            .collect()
    }
}

#[async_trait]
impl MapPort for ConsoleMapPort {
    async fn render(&self, records: Vec<JobRecord>) -> DashboardResult<()> {
        let lines = Self::marker_lines(&records);
        println!("{} marker(s) plotted", lines.len());

        for line in &lines {
            println!("  {line}");
        }
        Ok(())
    }

    async fn render_error(&self, message: &str) -> DashboardResult<()> {
        println!("⚠️  {message}");
        println!("Failed to load map data. Please try again later.");
        Ok(())
    }

    async fn render_loading(&self) -> DashboardResult<()> {
        println!("Loading map...");
        Ok(())
    }
}

/// Distribution charts rendered as label/count rows with a bar per count.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStatsPort;

#[async_trait]
impl StatsPort for ConsoleStatsPort {
    async fn render(&self, distributions: DistributionSet) -> DashboardResult<()> {
        for (title, dist) in distributions.named() {
            println!("\n{title}");
            for (label, count) in dist.entries() {
                let bar = "#".repeat((*count).min(40) as usize);
                println!("  {label:<12} {count:>5} {bar}");
            }
        }
        Ok(())
    }

    async fn render_error(&self, message: &str) -> DashboardResult<()> {
        println!("⚠️  Analytics unavailable: {message}");
        Ok(())
    }
}
