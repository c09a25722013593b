//! Aggregation engine
//!
//! Six pure reducers, each mapping a record sequence to one fixed-category
//! distribution. All label sets are declared up front; a category absent
//! from the input still appears with count zero. The reducers are
//! deterministic and order-independent (multiset reductions) and never fail
//! on well-formed input: a record missing a field is excluded from the
//! affected distribution only.

use chrono::{Datelike, Weekday};

use crate::types::{Distribution, DistributionSet, JobRecord};

const LANGUAGE_LABELS: [&str; 7] = ["C#", "Python", "JavaScript", "Java", "PHP", "Ruby", "Golang"];

const SALARY_BAND_LABELS: [&str; 4] = ["< $50k", "$50k-$100k", "$100k-$150k", "> $150k"];

const EDUCATION_LABELS: [&str; 2] = ["No Degree Required", "Degree Required"];

const TREND_LABELS: [&str; 12] = [
    "2023-Q1", "2023-Q2", "2023-Q3", "2023-Q4", "2024-Q1", "2024-Q2", "2024-Q3", "2024-Q4",
    "2025-Q1", "2025-Q2", "2025-Q3", "2025-Q4",
];

const WEEKDAY_LABELS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const HISTOGRAM_LABELS: [&str; 9] = [
    "20k-30k", "30k-40k", "40k-50k", "50k-60k", "60k-70k", "70k-80k", "80k-90k", "90k-100k",
    "100k+",
];

const DEGREE_KEYWORDS: [&str; 7] = [
    "bachelor",
    "bachelor's",
    "master",
    "master's",
    "phd",
    "ph.d",
    "doctorate",
];

/// Run all six reducers over the same record set.
pub fn aggregate_all(records: &[JobRecord]) -> DistributionSet {
    DistributionSet {
        languages: language_distribution(records),
        salary_bands: salary_band_distribution(records),
        education: education_distribution(records),
        quarterly_trend: quarterly_trend_distribution(records),
        day_of_week: day_of_week_distribution(records),
        salary_histogram: salary_histogram_distribution(records),
    }
}

/// Programming-language mentions in job descriptions.
///
/// The predicates are independent boolean tests, not a first-match dispatch:
/// one record may count toward several languages, and the sum of counts may
/// exceed the record count. The "js" substring match (no word boundary) and
/// the trailing-delimiter forms of "java" are part of the observed contract.
pub fn language_distribution(records: &[JobRecord]) -> Distribution {
    let mut dist = Distribution::with_labels(&LANGUAGE_LABELS);

    for record in records {
        let description = record.description.to_lowercase();

        if description.contains("c#") || description.contains("csharp") || description.contains(".net")
        {
            dist.increment("C#");
        }
        if description.contains("python") {
            dist.increment("Python");
        }
        if description.contains("javascript") || description.contains("js") {
            dist.increment("JavaScript");
        }
        // "java " / "java," / "java." so "javascript" alone never counts as Java
        if description.contains("java ") || description.contains("java,") || description.contains("java.")
        {
            dist.increment("Java");
        }
        if description.contains("php") {
            dist.increment("PHP");
        }
        if description.contains("ruby") {
            dist.increment("Ruby");
        }
        if description.contains("golang") {
            dist.increment("Golang");
        }
    }

    dist
}

/// Salaries bucketed into four mutually exclusive half-open bands.
/// Records without a salary count nowhere.
pub fn salary_band_distribution(records: &[JobRecord]) -> Distribution {
    let mut dist = Distribution::with_labels(&SALARY_BAND_LABELS);

    for record in records {
        let Some(salary) = record.salary else {
            continue;
        };
        let label = match salary {
            0..=49_999 => "< $50k",
            50_000..=99_999 => "$50k-$100k",
            100_000..=149_999 => "$100k-$150k",
            _ => "> $150k",
        };
        dist.increment(label);
    }

    dist
}

/// Degree requirement derived from description keywords. Every record lands
/// in exactly one of the two categories.
pub fn education_distribution(records: &[JobRecord]) -> Distribution {
    let mut dist = Distribution::with_labels(&EDUCATION_LABELS);

    for record in records {
        let description = record.description.to_lowercase();
        let requires_degree = DEGREE_KEYWORDS
            .iter()
            .any(|keyword| description.contains(keyword));
        dist.increment(if requires_degree {
            "Degree Required"
        } else {
            "No Degree Required"
        });
    }

    dist
}

/// Publications per quarter across the fixed 2023-Q1..2025-Q4 window.
/// Records dated outside the window, or without a date, are silently
/// dropped from this distribution.
pub fn quarterly_trend_distribution(records: &[JobRecord]) -> Distribution {
    let mut dist = Distribution::with_labels(&TREND_LABELS);

    for record in records {
        let Some(date) = record.publication_date else {
            continue;
        };
        let quarter = (date.month() + 2) / 3;
        let label = format!("{}-Q{}", date.year(), quarter);
        dist.increment(&label);
    }

    dist
}

/// Publications per weekday, Sunday through Saturday, using the canonical
/// English weekday names. Records without a date are dropped.
pub fn day_of_week_distribution(records: &[JobRecord]) -> Distribution {
    let mut dist = Distribution::with_labels(&WEEKDAY_LABELS);

    for record in records {
        let Some(date) = record.publication_date else {
            continue;
        };
        dist.increment(weekday_name(date.weekday()));
    }

    dist
}

/// Salaries in $10k bands from $20k up, with a "100k+" catch-all.
/// Salaries below $20k and absent salaries count nowhere.
pub fn salary_histogram_distribution(records: &[JobRecord]) -> Distribution {
    let mut dist = Distribution::with_labels(&HISTOGRAM_LABELS);

    for record in records {
        let Some(salary) = record.salary else {
            continue;
        };
        let label = match salary {
            20_000..=29_999 => "20k-30k",
            30_000..=39_999 => "30k-40k",
            40_000..=49_999 => "40k-50k",
            50_000..=59_999 => "50k-60k",
            60_000..=69_999 => "60k-70k",
            70_000..=79_999 => "70k-80k",
            80_000..=89_999 => "80k-90k",
            90_000..=99_999 => "90k-100k",
            100_000.. => "100k+",
            _ => continue,
        };
        dist.increment(label);
    }

    dist
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
