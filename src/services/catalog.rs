use std::collections::HashSet;
use thiserror::Error;
use crate::models::Profile;

/// Errors raised when building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate profile id: {0}")]
    DuplicateId(u32),

    #[error("Profile {id} has an empty {field}")]
    BlankField { id: u32, field: &'static str },
}

/// Read-only list of candidate roommates
///
/// Ids are unique and every text field is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

impl Catalog {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(profiles.len());

        for profile in &profiles {
            if !seen.insert(profile.id) {
                return Err(CatalogError::DuplicateId(profile.id));
            }
            check_fields(profile)?;
        }

        Ok(Self { profiles })
    }

    /// The built-in mock roommates
    pub fn mock() -> Result<Self, CatalogError> {
        Self::new(mock_profiles())
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn check_fields(profile: &Profile) -> Result<(), CatalogError> {
    let fields = [
        ("name", &profile.name),
        ("university", &profile.university),
        ("major", &profile.major),
        ("location", &profile.location),
        ("budget", &profile.budget),
        ("bio", &profile.bio),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(CatalogError::BlankField { id: profile.id, field });
        }
    }

    if profile.interests.is_empty() {
        return Err(CatalogError::BlankField { id: profile.id, field: "interests" });
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: u32,
    name: &str,
    age: u8,
    university: &str,
    major: &str,
    location: &str,
    budget: &str,
    bio: &str,
    interests: &[&str],
    rating: f64,
    verified: bool,
    image: &str,
) -> Profile {
    Profile {
        id,
        name: name.to_string(),
        age,
        university: university.to_string(),
        major: major.to_string(),
        location: location.to_string(),
        budget: budget.to_string(),
        bio: bio.to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        rating,
        verified,
        image: image.to_string(),
    }
}

fn mock_profiles() -> Vec<Profile> {
    vec![
        profile(
            1,
            "Sarah Chen",
            20,
            "UC Berkeley",
            "Computer Science",
            "Berkeley, CA",
            "$800-1200",
            "CS major looking for a study-focused roommate. Love coding, hiking, and cooking Asian food!",
            &["Coding", "Hiking", "Cooking", "Gaming"],
            4.8,
            true,
            "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=400&h=400&fit=crop&crop=face",
        ),
        profile(
            2,
            "Mike Rodriguez",
            22,
            "Stanford",
            "Business",
            "Palo Alto, CA",
            "$1200-1600",
            "Business student who values cleanliness and quiet study time. Looking for responsible roommates.",
            &["Business", "Fitness", "Reading", "Travel"],
            4.9,
            true,
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        ),
        profile(
            3,
            "Emma Thompson",
            19,
            "UC Berkeley",
            "Psychology",
            "Berkeley, CA",
            "$600-800",
            "Psychology major, early bird, loves plants and creating a cozy living space. Non-smoker.",
            &["Psychology", "Plants", "Yoga", "Music"],
            4.7,
            true,
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
        ),
        profile(
            4,
            "David Kim",
            21,
            "Stanford",
            "Engineering",
            "Stanford, CA",
            "$1000-1400",
            "Engineering student, clean and organized. Looking for someone who respects study schedules.",
            &["Engineering", "Basketball", "Technology", "Movies"],
            4.6,
            false,
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_is_valid() {
        let mock = Catalog::mock().unwrap();

        assert_eq!(mock.len(), 4);
        let names: Vec<&str> = mock.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Chen", "Mike Rodriguez", "Emma Thompson", "David Kim"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut profiles = mock_profiles();
        profiles[1].id = 1;

        assert_eq!(Catalog::new(profiles), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut profiles = mock_profiles();
        profiles[2].major = "  ".to_string();

        assert_eq!(
            Catalog::new(profiles),
            Err(CatalogError::BlankField { id: 3, field: "major" })
        );
    }
}
