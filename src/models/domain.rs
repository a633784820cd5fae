use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Prospective roommate shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub university: String,
    pub major: String,
    /// Free-form "City, ST"
    pub location: String,
    /// Range label, e.g. "$800-1200"
    pub budget: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub rating: f64,
    pub verified: bool,
    #[serde(default)]
    pub image: String,
}

/// Monthly budget ranges offered by the budget selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "500-800")]
    From500To800,
    #[serde(rename = "800-1200")]
    From800To1200,
    #[serde(rename = "1200-1600")]
    From1200To1600,
    #[serde(rename = "1600+")]
    Over1600,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::From500To800,
        BudgetRange::From800To1200,
        BudgetRange::From1200To1600,
        BudgetRange::Over1600,
    ];

    /// Token matched against `Profile::budget`
    pub fn token(&self) -> &'static str {
        match self {
            BudgetRange::From500To800 => "500-800",
            BudgetRange::From800To1200 => "800-1200",
            BudgetRange::From1200To1600 => "1200-1600",
            BudgetRange::Over1600 => "1600+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::From500To800 => "$500 - $800",
            BudgetRange::From800To1200 => "$800 - $1,200",
            BudgetRange::From1200To1600 => "$1,200 - $1,600",
            BudgetRange::Over1600 => "$1,600+",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dashboard location select as `(token, label)`, in display order
///
/// The token is matched as a substring of `Profile::location`; the empty
/// token means no constraint.
pub const LOCATION_OPTIONS: [(&str, &str); 5] = [
    ("", "All Locations"),
    ("Berkeley", "Berkeley, CA"),
    ("Stanford", "Stanford, CA"),
    ("Palo Alto", "Palo Alto, CA"),
    ("San Francisco", "San Francisco, CA"),
];

/// Interest tags a registering user can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Gaming,
    Sports,
    Music,
    Reading,
    Cooking,
    Art,
    Travel,
    Technology,
    Photography,
    Fitness,
    Movies,
    Dancing,
    Hiking,
}

impl Interest {
    /// Option list in display order
    pub const ALL: [Interest; 13] = [
        Interest::Gaming,
        Interest::Sports,
        Interest::Music,
        Interest::Reading,
        Interest::Cooking,
        Interest::Art,
        Interest::Travel,
        Interest::Technology,
        Interest::Photography,
        Interest::Fitness,
        Interest::Movies,
        Interest::Dancing,
        Interest::Hiking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Gaming => "Gaming",
            Interest::Sports => "Sports",
            Interest::Music => "Music",
            Interest::Reading => "Reading",
            Interest::Cooking => "Cooking",
            Interest::Art => "Art",
            Interest::Travel => "Travel",
            Interest::Technology => "Technology",
            Interest::Photography => "Photography",
            Interest::Fitness => "Fitness",
            Interest::Movies => "Movies",
            Interest::Dancing => "Dancing",
            Interest::Hiking => "Hiking",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoking {
    Yes,
    No,
    Occasionally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pets {
    Love,
    Neutral,
    Allergic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NightOwl {
    Yes,
    No,
    Sometimes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cleanliness {
    VeryTidy,
    Tidy,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomType {
    Private,
    Shared,
    Studio,
}

/// Lifestyle answers; `None` means the select was never touched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    pub smoking: Option<Smoking>,
    pub pets: Option<Pets>,
    pub night_owl: Option<NightOwl>,
    pub cleanliness: Option<Cleanliness>,
}

/// Registration form data accumulated across the wizard steps
///
/// The `length` rules mirror the inputs marked required in the form. They
/// only feed the incomplete-field report and never block navigation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(skip_serializing)]
    pub password: String,
    // Collected but never compared with `password`.
    #[validate(length(min = 1))]
    #[serde(skip_serializing)]
    pub confirm_password: String,
    #[validate(length(min = 1))]
    pub university: String,
    #[validate(length(min = 1))]
    pub major: String,
    pub graduation_year: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub budget: Option<BudgetRange>,
    pub interests: Vec<Interest>,
    pub lifestyle: Lifestyle,
    pub room_type: Option<RoomType>,
    pub bio: String,
    /// Terms of Service / Privacy Policy acknowledgement
    pub verified: bool,
}

/// A single field edit coming from the registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum DraftField {
    FirstName(String),
    LastName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    University(String),
    Major(String),
    GraduationYear(String),
    Location(String),
    Budget(BudgetRange),
    Smoking(Smoking),
    Pets(Pets),
    NightOwl(NightOwl),
    Cleanliness(Cleanliness),
    RoomType(RoomType),
    Bio(String),
    Verified(bool),
}

impl RegistrationDraft {
    /// Apply one field edit in place
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::FirstName(v) => self.first_name = v,
            DraftField::LastName(v) => self.last_name = v,
            DraftField::Email(v) => self.email = v,
            DraftField::Password(v) => self.password = v,
            DraftField::ConfirmPassword(v) => self.confirm_password = v,
            DraftField::University(v) => self.university = v,
            DraftField::Major(v) => self.major = v,
            DraftField::GraduationYear(v) => self.graduation_year = v,
            DraftField::Location(v) => self.location = v,
            DraftField::Budget(v) => self.budget = Some(v),
            DraftField::Smoking(v) => self.lifestyle.smoking = Some(v),
            DraftField::Pets(v) => self.lifestyle.pets = Some(v),
            DraftField::NightOwl(v) => self.lifestyle.night_owl = Some(v),
            DraftField::Cleanliness(v) => self.lifestyle.cleanliness = Some(v),
            DraftField::RoomType(v) => self.room_type = Some(v),
            DraftField::Bio(v) => self.bio = v,
            DraftField::Verified(v) => self.verified = v,
        }
    }
}
