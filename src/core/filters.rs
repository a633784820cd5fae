use crate::models::{BudgetRange, FilterCriteria, Profile};

/// Check the free-text query against name, major and university
///
/// Case-insensitive; an empty query matches every profile.
#[inline]
pub fn matches_query(profile: &Profile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    profile.name.to_lowercase().contains(&needle)
        || profile.major.to_lowercase().contains(&needle)
        || profile.university.to_lowercase().contains(&needle)
}

/// Check the location token against the profile's location
///
/// Case-sensitive substring match; an empty token matches everything.
#[inline]
pub fn matches_location(profile: &Profile, location: &str) -> bool {
    location.is_empty() || profile.location.contains(location)
}

/// Check the budget token against the profile's budget label
#[inline]
pub fn matches_budget(profile: &Profile, budget: Option<BudgetRange>) -> bool {
    match budget {
        None => true,
        Some(range) => profile.budget.contains(range.token()),
    }
}

/// All three predicates must hold
#[inline]
pub fn matches_criteria(profile: &Profile, criteria: &FilterCriteria) -> bool {
    matches_query(profile, &criteria.query)
        && matches_location(profile, &criteria.location)
        && matches_budget(profile, criteria.budget)
}
