use crate::core::filters::matches_criteria;
use crate::models::{FilterCriteria, Profile};

/// Result of filtering the candidate list
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matches: Vec<Profile>,
    pub total_candidates: usize,
    /// Whether any criterion was set. An empty `matches` with `is_filtered`
    /// false only happens for an empty catalog.
    pub is_filtered: bool,
}

impl MatchResult {
    pub fn showing(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Stable filter: keeps input order, never re-sorts
pub fn filter(candidates: &[Profile], criteria: &FilterCriteria) -> Vec<Profile> {
    candidates
        .iter()
        .filter(|profile| matches_criteria(profile, criteria))
        .cloned()
        .collect()
}

/// Filter and keep the counts the dashboard needs
pub fn find_matches(candidates: &[Profile], criteria: &FilterCriteria) -> MatchResult {
    let matches = filter(candidates, criteria);

    tracing::debug!(
        "Filtered {} of {} candidates (query={:?}, location={:?}, budget={:?})",
        matches.len(),
        candidates.len(),
        criteria.query,
        criteria.location,
        criteria.budget
    );

    MatchResult {
        matches,
        total_candidates: candidates.len(),
        is_filtered: !criteria.is_empty(),
    }
}
