//! Derives the list a user sees from the raw job list plus the current
//! filter and sort selections. Pure functions; the raw list is never
//! mutated.

pub mod filter;
pub mod sort;
pub mod stats;

use std::collections::BTreeSet;

use crate::models::JobPosting;

pub use filter::FilterSelection;
pub use sort::{SortDirection, SortField, SortSelection};
pub use stats::ListingStats;

/// Filtered and ordered view of `raw`. Ties keep their relative order from
/// `raw`.
pub fn derive_jobs<'a>(
    raw: &'a [JobPosting],
    filter: &FilterSelection,
    sort: &SortSelection,
) -> Vec<&'a JobPosting> {
    let mut jobs: Vec<&JobPosting> = raw.iter().filter(|job| filter.matches(job)).collect();
    jobs.sort_by(|a, b| sort.compare(a, b));
    jobs
}

fn distinct<'a, F>(raw: &'a [JobPosting], attr: F) -> Vec<String>
where
    F: Fn(&'a JobPosting) -> Option<&'a str>,
{
    raw.iter()
        .filter_map(attr)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Non-empty seniority levels, de-duplicated, lexicographic.
pub fn distinct_seniority_levels(raw: &[JobPosting]) -> Vec<String> {
    distinct(raw, |job| job.seniority_level.as_deref())
}

/// Non-empty fields, de-duplicated, lexicographic.
pub fn distinct_fields(raw: &[JobPosting]) -> Vec<String> {
    distinct(raw, |job| job.field.as_deref())
}

pub fn stats(raw: &[JobPosting], derived: &[&JobPosting]) -> ListingStats {
    ListingStats::new(raw.len(), derived.len())
}
