//! Type definitions for the job dashboard
//!
//! This module contains the data types shared across the aggregation engine,
//! the sort engine, and the view-synchronization controller.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single job posting as returned by the jobs API.
///
/// Records are immutable once received. Optional fields stay optional on
/// purpose: a record missing its salary or publication date is still a valid
/// record, it is simply excluded from the distributions that need the missing
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "job_title", default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: Option<u64>,
    #[serde(default)]
    pub employer_name: String,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "job_url", default)]
    pub url: String,
}

impl JobRecord {
    /// Coordinates of the record, if it carries both halves of the pair.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// An ordered mapping from a fixed set of category labels to counts.
///
/// The label set is declared up front and never grows or shrinks during
/// aggregation: every label is present from construction with count zero,
/// and `increment` refuses labels that were not declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    entries: Vec<(String, u64)>,
}

impl Distribution {
    /// Create a distribution with every label present at count zero.
    pub fn with_labels(labels: &[&str]) -> Self {
        Self {
            entries: labels.iter().map(|label| (label.to_string(), 0)).collect(),
        }
    }

    /// Increment a declared label. Returns false (and counts nothing) when
    /// the label is not part of the fixed set; the quarterly-trend reducer
    /// relies on this to drop out-of-window quarters.
    pub fn increment(&mut self, label: &str) -> bool {
        match self.entries.iter_mut().find(|(known, _)| known == label) {
            Some((_, count)) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn count(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(known, _)| known == label)
            .map(|(_, count)| *count)
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// Sum of all category counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

/// The six distribution results handed to the stats port as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSet {
    pub languages: Distribution,
    pub salary_bands: Distribution,
    pub education: Distribution,
    pub quarterly_trend: Distribution,
    pub day_of_week: Distribution,
    pub salary_histogram: Distribution,
}

impl DistributionSet {
    /// The six distributions with their chart titles, in render order.
    pub fn named(&self) -> [(&'static str, &Distribution); 6] {
        [
            ("Programming Languages", &self.languages),
            ("Salary Bands", &self.salary_bands),
            ("Education Requirements", &self.education),
            ("Quarterly Trend", &self.quarterly_trend),
            ("Publications per Weekday", &self.day_of_week),
            ("Salary Histogram", &self.salary_histogram),
        ]
    }
}

/// Sortable columns of the tabular job list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Location,
    Salary,
    Employer,
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "title" | "job_title" => Ok(Self::Title),
            "location" => Ok(Self::Location),
            "salary" => Ok(Self::Salary),
            "employer" | "company" | "employer_name" => Ok(Self::Employer),
            other => Err(format!("unknown sort column: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
