use std::cmp::Ordering;

use crate::core::distance::compute_distance;
use crate::models::{Candidate, Point, RankedCandidate, SortKey};

/// Bundled parameters for a proximity search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParameters {
    pub origin: Point,
    pub radius_km: f64,
    pub sort_key: SortKey,
}

impl SearchParameters {
    pub fn new(origin: Point, radius_km: f64, sort_key: SortKey) -> Self {
        Self { origin, radius_km, sort_key }
    }

    /// Run [`search`] with these parameters
    pub fn apply<T: Candidate + Clone>(&self, candidates: &[T]) -> Vec<RankedCandidate<T>> {
        search(self.origin, candidates, self.radius_km, self.sort_key)
    }
}

/// Rank candidates within `radius_km` of `origin`
///
/// # Pipeline
/// 1. Annotate a copy of every candidate with its distance from `origin`
/// 2. Drop candidates farther than `radius_km`
/// 3. Stable sort by `sort_key`: ascending distance, descending experience
///    or case-insensitive name
///
/// The input slice is left untouched. A non-positive radius matches nothing.
pub fn search<T: Candidate + Clone>(
    origin: Point,
    candidates: &[T],
    radius_km: f64,
    sort_key: SortKey,
) -> Vec<RankedCandidate<T>> {
    if radius_km.is_nan() || radius_km <= 0.0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedCandidate<T>> = candidates
        .iter()
        .map(|candidate| RankedCandidate {
            distance_km: compute_distance(origin, candidate.point()),
            candidate: candidate.clone(),
        })
        // NaN distances fail this comparison and are dropped
        .filter(|r| r.distance_km <= radius_km)
        .collect();

    // slice::sort_by is stable, ties keep input order
    ranked.sort_by(|a, b| compare(a, b, sort_key));

    tracing::trace!(
        "Proximity search kept {} of {} candidates (radius {}km, sort {:?})",
        ranked.len(),
        candidates.len(),
        radius_km,
        sort_key
    );

    ranked
}

fn compare<T: Candidate>(a: &RankedCandidate<T>, b: &RankedCandidate<T>, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Distance => a.distance_km.total_cmp(&b.distance_km),
        SortKey::Experience => b
            .candidate
            .years_of_experience()
            .cmp(&a.candidate.years_of_experience()),
        SortKey::Name => cmp_ignore_case(a.candidate.display_name(), b.candidate.display_name()),
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
