use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;
use crate::models::{DraftField, Interest, Notification, RegistrationDraft};
use crate::routes::Route;
use crate::services::SimulatedLatency;

/// Errors for rejected wizard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Registration can only be submitted from the final step, currently on step {0}")]
    NotOnFinalStep(u8),

    #[error("Terms of Service must be accepted before creating an account")]
    TermsNotAccepted,

    #[error("Registration is already being submitted")]
    AlreadySubmitting,

    #[error("Registration has already completed")]
    AlreadyRegistered,
}

/// Registration wizard stages, strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Basic information
    Identity,
    /// Preferences & lifestyle
    Preferences,
    /// Profile & verification
    Verification,
}

impl Step {
    pub const TOTAL: u8 = 3;

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Preferences => 2,
            Step::Verification => 3,
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Identity => Some(Step::Preferences),
            Step::Preferences => Some(Step::Verification),
            Step::Verification => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Identity => None,
            Step::Preferences => Some(Step::Identity),
            Step::Verification => Some(Step::Preferences),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Identity => "Basic Information",
            Step::Preferences => "Preferences & Lifestyle",
            Step::Verification => "Profile & Verification",
        }
    }

    /// Draft fields rendered as required inputs on this step
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Step::Identity => &[
                "first_name",
                "last_name",
                "email",
                "password",
                "confirm_password",
                "university",
                "major",
            ],
            Step::Preferences => &["location"],
            Step::Verification => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStatus {
    Editing,
    Submitting,
    Registered,
}

/// Successful registration
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome {
    pub email: String,
    pub notification: Notification,
    pub redirect: Route,
}

/// Three-step registration state machine
///
/// Forward navigation is only bounded by the step index; incomplete fields
/// never block `next()`. Submission requires the final step and the terms
/// acknowledgement, waits out the simulated latency and always succeeds.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    status: WizardStatus,
    draft: RegistrationDraft,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Identity,
            status: WizardStatus::Editing,
            draft: RegistrationDraft::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn update(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Advance one step; stays put on the last step
    pub fn next(&mut self) -> Step {
        if let Some(step) = self.step.next() {
            self.step = step;
        }
        self.step
    }

    /// Go back one step; stays put on the first step
    pub fn previous(&mut self) -> Step {
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
        self.step
    }

    /// Returns false if the interest was already chosen
    pub fn add_interest(&mut self, interest: Interest) -> bool {
        if self.draft.interests.contains(&interest) {
            return false;
        }
        self.draft.interests.push(interest);
        true
    }

    /// Returns false if the interest was not chosen
    pub fn remove_interest(&mut self, interest: Interest) -> bool {
        let before = self.draft.interests.len();
        self.draft.interests.retain(|i| *i != interest);
        self.draft.interests.len() != before
    }

    /// Options still offered by the "Add interests" select
    pub fn available_interests(&self) -> Vec<Interest> {
        Interest::ALL
            .iter()
            .copied()
            .filter(|i| !self.draft.interests.contains(i))
            .collect()
    }

    /// Required inputs of `step` that are still blank, in form order
    ///
    /// Informational only.
    pub fn missing_required_fields(&self, step: Step) -> Vec<&'static str> {
        let errors = match self.draft.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };
        let failing = errors.field_errors();

        step.required_fields()
            .iter()
            .copied()
            .filter(|field| failing.contains_key(*field))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Verification
            && self.draft.verified
            && self.status == WizardStatus::Editing
    }

    /// Submit the draft
    ///
    /// The draft is consumed on success. `confirm_password` is not compared
    /// with `password`.
    pub async fn submit(
        &mut self,
        latency: &SimulatedLatency,
    ) -> Result<RegistrationOutcome, WizardError> {
        match self.status {
            WizardStatus::Submitting => return Err(WizardError::AlreadySubmitting),
            WizardStatus::Registered => return Err(WizardError::AlreadyRegistered),
            WizardStatus::Editing => {}
        }
        if self.step != Step::Verification {
            return Err(WizardError::NotOnFinalStep(self.step.number()));
        }
        if !self.draft.verified {
            return Err(WizardError::TermsNotAccepted);
        }

        let submitting = SubmitGuard::begin(&mut self.status);
        tracing::info!("Submitting registration for {:?}", self.draft.email);

        latency.wait().await;

        let draft = std::mem::take(&mut self.draft);
        submitting.finish();

        tracing::info!("Registration completed for {:?}", draft.email);

        Ok(RegistrationOutcome {
            email: draft.email,
            notification: Notification::success(
                "Account created successfully!",
                "Welcome to RoomieFind. You can now start finding roommates.",
            ),
            redirect: Route::Dashboard,
        })
    }
}

/// Holds the wizard in `Submitting` while a submit is in flight
///
/// If the submit future is dropped before it completes, the wizard goes back
/// to `Editing` with its draft untouched.
struct SubmitGuard<'a> {
    status: &'a mut WizardStatus,
}

impl<'a> SubmitGuard<'a> {
    fn begin(status: &'a mut WizardStatus) -> Self {
        *status = WizardStatus::Submitting;
        Self { status }
    }

    fn finish(self) {
        *self.status = WizardStatus::Registered;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if *self.status == WizardStatus::Submitting {
            tracing::warn!("Registration submit abandoned before completion");
            *self.status = WizardStatus::Editing;
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
