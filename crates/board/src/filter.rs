//! The filter/search engine: category, location and keyword predicates plus
//! the always-applied expiry cut, and the per-control counts computed over
//! the non-expired subset.

use crate::state::{FilterState, ALL_LOCATIONS};
use chrono::NaiveDate;
use jobbermed_core::taxonomy::{ALL_CATEGORY, CATEGORIES};
use jobbermed_core::Job;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug)]
pub struct FilterOutcome<'a> {
    /// Visible jobs in store order.
    pub jobs: Vec<&'a Job>,
    /// Taxonomy order, "All" first. Counts cover non-expired jobs only.
    pub category_counts: Vec<(&'static str, usize)>,
    /// Alphabetical. Counts cover non-expired jobs only.
    pub location_counts: Vec<(String, usize)>,
}

/// Applies the full chain for the current state. Also resets a stale
/// location selection: when the chosen bucket no longer occurs among active
/// jobs, the state falls back to "All locations" before filtering.
pub fn apply<'a>(jobs: &'a [Job], state: &mut FilterState, today: NaiveDate) -> FilterOutcome<'a> {
    let active: Vec<&Job> = jobs.iter().filter(|j| !j.is_expired(today)).collect();

    let mut location_counts: BTreeMap<String, usize> = BTreeMap::new();
    for job in &active {
        for bucket in &job.location_buckets {
            *location_counts.entry(bucket.clone()).or_insert(0) += 1;
        }
    }

    if !state.location_is_all() && !location_counts.contains_key(&state.location) {
        debug!(location = %state.location, "selected location no longer present, resetting");
        state.set_location(ALL_LOCATIONS);
    }

    // "All" is the total active count, computed independently of the
    // per-category sums.
    let category_counts = CATEGORIES
        .iter()
        .map(|&label| {
            let count = if label == ALL_CATEGORY {
                active.len()
            } else {
                active.iter().filter(|j| j.category == label).count()
            };
            (label, count)
        })
        .collect();

    FilterOutcome {
        jobs: visible_jobs(jobs, state, today),
        category_counts,
        location_counts: location_counts.into_iter().collect(),
    }
}

/// The predicate chain alone. Category, location and keyword are independent
/// predicates; expiry is applied last and unconditionally.
pub fn visible_jobs<'a>(jobs: &'a [Job], state: &FilterState, today: NaiveDate) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|j| state.category_is_all() || j.category == state.category)
        .filter(|j| state.location_is_all() || j.location_buckets.contains(&state.location))
        .filter(|j| state.query.is_empty() || haystack(j).contains(&state.query))
        .filter(|j| !j.is_expired(today))
        .collect()
}

fn haystack(job: &Job) -> String {
    [
        job.raw.job_title.as_deref().unwrap_or(""),
        job.raw.company.as_deref().unwrap_or(""),
        job.raw.location.as_deref().unwrap_or(""),
        job.raw.job_type.as_deref().unwrap_or(""),
        job.category,
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobbermed_core::RawJob;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 23).unwrap()
    }

    fn sample() -> Vec<Job> {
        let records = [
            ("Registered Nurse", "St. Mary Clinic", "Lagos, Nigeria", "2099-01-01"),
            ("Medical Officer", "Garki Hospital", "Abuja, Nigeria", "2099-01-01"),
            ("Pharmacist", "HealthPlus", "Lagos, Nigeria", "2020-01-01"), // expired
            ("Nursing Manager", "Reddington", "Ikeja, Lagos", "2099-01-01"),
        ];
        records
            .into_iter()
            .map(|(title, company, location, deadline)| {
                Job::derive(RawJob {
                    job_title: Some(title.to_string()),
                    company: Some(company.to_string()),
                    location: Some(location.to_string()),
                    deadline: Some(deadline.to_string()),
                    ..Default::default()
                })
            })
            .collect()
    }

    #[test]
    fn expired_jobs_are_excluded_from_every_view() {
        let jobs = sample();

        let all = visible_jobs(&jobs, &FilterState::default(), today());
        assert_eq!(all.len(), 3);

        let mut by_category = FilterState::default();
        by_category.set_category("Pharmacists");
        assert!(visible_jobs(&jobs, &by_category, today()).is_empty());

        let mut by_query = FilterState::default();
        by_query.set_query("healthplus");
        assert!(visible_jobs(&jobs, &by_query, today()).is_empty());
    }

    #[test]
    fn category_filter() {
        let jobs = sample();
        let mut state = FilterState::default();
        state.set_category("Nurses & Midwives");
        let visible = visible_jobs(&jobs, &state, today());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn location_filter_uses_buckets() {
        let jobs = sample();
        let mut state = FilterState::default();
        state.set_location("Lagos State");
        assert_eq!(visible_jobs(&jobs, &state, today()).len(), 2);

        state.set_location("FCT");
        let fct = visible_jobs(&jobs, &state, today());
        assert_eq!(fct.len(), 1);
        assert_eq!(fct[0].raw.job_title.as_deref(), Some("Medical Officer"));
    }

    #[test]
    fn keyword_searches_title_company_location_type_and_category() {
        let jobs = sample();
        let mut state = FilterState::default();

        state.set_query("reddington");
        assert_eq!(visible_jobs(&jobs, &state, today()).len(), 1);

        // Derived category text is searchable too.
        state.set_query("doctors");
        assert_eq!(visible_jobs(&jobs, &state, today()).len(), 1);

        state.set_query("zzz");
        assert!(visible_jobs(&jobs, &state, today()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let jobs = sample();
        let mut state = FilterState::default();
        state.set_category("Nurses & Midwives");
        state.set_query("lagos");

        let once: Vec<_> = visible_jobs(&jobs, &state, today())
            .iter()
            .map(|j| j.slug.clone())
            .collect();
        let twice: Vec<_> = visible_jobs(&jobs, &state, today())
            .iter()
            .map(|j| j.slug.clone())
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn counts_cover_the_non_expired_subset_only() {
        let jobs = sample();
        let mut state = FilterState::default();
        let outcome = apply(&jobs, &mut state, today());

        let count = |label: &str| {
            outcome
                .category_counts
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, c)| *c)
                .unwrap()
        };
        assert_eq!(count("All"), 3);
        assert_eq!(count("Nurses & Midwives"), 2);
        assert_eq!(count("Doctors"), 1);
        assert_eq!(count("Pharmacists"), 0); // expired

        let lagos = outcome
            .location_counts
            .iter()
            .find(|(l, _)| l == "Lagos State")
            .map(|(_, c)| *c)
            .unwrap();
        assert_eq!(lagos, 2);
    }

    #[test]
    fn stale_location_selection_resets_to_all() {
        let jobs = sample();
        let mut state = FilterState::default();
        state.set_location("Ghana");
        state.set_page(3);

        let outcome = apply(&jobs, &mut state, today());
        assert!(state.location_is_all());
        assert_eq!(state.page, 1);
        assert_eq!(outcome.jobs.len(), 3);
    }
}
