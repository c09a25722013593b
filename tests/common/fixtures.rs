//! Test fixtures for job dashboard tests
//!
//! Provides consistent job records used across the test suites.

use chrono::NaiveDate;
use jobdash::JobRecord;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Minimal record with only title and description populated.
    pub fn job(title: &str, description: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            description: description.to_string(),
            location: String::new(),
            salary: None,
            employer_name: String::new(),
            publication_date: None,
            latitude: None,
            longitude: None,
            url: String::new(),
        }
    }

    pub fn job_with_salary(title: &str, salary: Option<u64>) -> JobRecord {
        JobRecord {
            salary,
            ..Self::job(title, "")
        }
    }

    pub fn job_published(title: &str, date: &str) -> JobRecord {
        JobRecord {
            publication_date: Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
            ..Self::job(title, "")
        }
    }

    pub fn located_job(title: &str, latitude: f64, longitude: f64) -> JobRecord {
        JobRecord {
            latitude: Some(latitude),
            longitude: Some(longitude),
            location: "somewhere".to_string(),
            ..Self::job(title, "")
        }
    }

    /// A mixed dataset exercising every reducer at once.
    pub fn full_dataset() -> Vec<JobRecord> {
        vec![
            JobRecord {
                title: "Backend Engineer".to_string(),
                description: "Python and Golang services, bachelor required".to_string(),
                location: "Berlin".to_string(),
                salary: Some(85_000),
                employer_name: "Acme".to_string(),
                publication_date: NaiveDate::from_ymd_opt(2024, 5, 13),
                latitude: Some(52.52),
                longitude: Some(13.405),
                url: "https://example.com/jobs/1".to_string(),
            },
            JobRecord {
                title: "Frontend Developer".to_string(),
                description: "JavaScript, css".to_string(),
                location: "Lisbon".to_string(),
                salary: Some(45_000),
                employer_name: "Widgets Ltd".to_string(),
                publication_date: NaiveDate::from_ymd_opt(2023, 11, 3),
                latitude: Some(38.72),
                longitude: Some(-9.14),
                url: "https://example.com/jobs/2".to_string(),
            },
            JobRecord {
                title: "Data Analyst".to_string(),
                description: "sql reporting".to_string(),
                location: "remote".to_string(),
                salary: None,
                employer_name: "Remote Co".to_string(),
                publication_date: None,
                latitude: None,
                longitude: None,
                url: "https://example.com/jobs/3".to_string(),
            },
        ]
    }
}
