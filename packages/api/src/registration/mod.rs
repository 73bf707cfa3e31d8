//! # Registration
//!
//! The sign-up page is a [`RegistrationForm`]: the typed-in answers
//! ([`ProfileForm`]), the cascading location picks ([`LocationCascade`]) and the
//! attached images ([`ImageAttachments`]). Submitting runs [`validate`] first and
//! only talks to the backend when nothing is wrong.
//!
//! | Outcome | Form afterwards |
//! |---------|-----------------|
//! | [`RegistrationOutcome::Invalid`] | unchanged, no request made |
//! | [`RegistrationOutcome::Created`] | every field, pick and image cleared |
//! | [`RegistrationOutcome::Rejected`] / [`Failed`](RegistrationOutcome::Failed) | unchanged, so the user can fix and resubmit |

pub mod attachments;
pub mod location;
pub mod validation;

pub use attachments::{
    AttachError, DataUrlPreviews, ImageAttachment, ImageAttachments, PreviewFactory, MAX_IMAGES,
};
pub use location::{
    LocationCascade, LocationCatalog, LocationData, LocationFetch, LocationOptions,
    LocationSelection, LOCATIONS_UNAVAILABLE,
};
pub use validation::{looks_like_email, validate};

use crate::client::Backend;
use crate::error::ApiError;
use crate::models::{RegisterResponse, RegistrationRecord};

pub const SUBMIT_FAILED: &str = "Failed to submit form";
pub const SUBMIT_ERROR: &str = "An error occurred while submitting the form.";

/// Typed-in answers, exactly as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub email: String,
    pub password: String,
    pub own_gender: String,
    pub gender_preference: String,
    pub daily_routine: String,
    pub priorities: String,
    pub wake_up_time: String,
    pub bed_time: String,
    pub home_space_use: String,
    pub biggest_stressors: String,
    pub worst_habit: String,
    pub deal_breakers: String,
    pub neatness_preference: String,
    pub pets: String,
    pub overnight_guests: String,
    pub confrontation_style: String,
    pub sunday_night_activity: String,
    pub roommate_self_assessment: String,
    pub move_in_date: String,
    pub move_out_date: String,
}

impl ProfileForm {
    /// Input by its wire name (`dailyRoutine`, `yourgender`, ...).
    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "name" => &mut self.name,
            "age" => &mut self.age,
            "email" => &mut self.email,
            "password" => &mut self.password,
            "yourgender" => &mut self.own_gender,
            "gender" => &mut self.gender_preference,
            "dailyRoutine" => &mut self.daily_routine,
            "priorities" => &mut self.priorities,
            "wakeUpTime" => &mut self.wake_up_time,
            "bedTime" => &mut self.bed_time,
            "homeSpaceUse" => &mut self.home_space_use,
            "biggestStressors" => &mut self.biggest_stressors,
            "worstHabit" => &mut self.worst_habit,
            "dealBreakers" => &mut self.deal_breakers,
            "neatnessPreference" => &mut self.neatness_preference,
            "pets" => &mut self.pets,
            "overnightGuests" => &mut self.overnight_guests,
            "confrontationStyle" => &mut self.confrontation_style,
            "sundayNightActivity" => &mut self.sunday_night_activity,
            "roommateSelfAssessment" => &mut self.roommate_self_assessment,
            "moveInDate" => &mut self.move_in_date,
            "moveOutDate" => &mut self.move_out_date,
            _ => return None,
        })
    }

    /// Set an input by wire name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                *field = value.to_string();
                true
            }
            None => {
                tracing::warn!("Unknown registration field {}", name);
                false
            }
        }
    }

    /// One of the long-form answers, by wire name.
    pub fn answer(&self, name: &str) -> Option<&str> {
        let value = match name {
            "dailyRoutine" => &self.daily_routine,
            "priorities" => &self.priorities,
            "homeSpaceUse" => &self.home_space_use,
            "biggestStressors" => &self.biggest_stressors,
            "worstHabit" => &self.worst_habit,
            "dealBreakers" => &self.deal_breakers,
            "confrontationStyle" => &self.confrontation_style,
            "sundayNightActivity" => &self.sunday_night_activity,
            "roommateSelfAssessment" => &self.roommate_self_assessment,
            _ => return None,
        };
        Some(value)
    }
}

/// What a submit attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Validation failed; nothing was sent.
    Invalid(Vec<String>),
    /// Account created; carries the server's message, if any.
    Created(Option<String>),
    /// The backend answered non-2xx.
    Rejected(String),
    /// The request did not complete.
    Failed(String),
}

impl RegistrationOutcome {
    /// Lines to show under the form heading.
    pub fn messages(&self) -> Vec<String> {
        match self {
            RegistrationOutcome::Invalid(errors) => errors.clone(),
            RegistrationOutcome::Created(message) => message.iter().cloned().collect(),
            RegistrationOutcome::Rejected(message) | RegistrationOutcome::Failed(message) => {
                vec![message.clone()]
            }
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, RegistrationOutcome::Created(_))
    }
}

/// The whole sign-up page state.
#[derive(Debug)]
pub struct RegistrationForm<F: PreviewFactory> {
    pub fields: ProfileForm,
    pub location: LocationCascade,
    pub images: ImageAttachments<F>,
}

impl<F: PreviewFactory> RegistrationForm<F> {
    pub fn new(previews: F) -> Self {
        Self {
            fields: ProfileForm::default(),
            location: LocationCascade::new(),
            images: ImageAttachments::new(previews),
        }
    }

    pub fn violations(&self) -> Vec<String> {
        validate(&self.fields, self.location.selection(), self.images.len())
    }

    /// Build the request body, or return every violation.
    pub fn prepare(&self) -> Result<RegistrationRecord, Vec<String>> {
        let errors = self.violations();
        if !errors.is_empty() {
            return Err(errors);
        }
        let f = &self.fields;
        let place = self.location.selection();
        Ok(RegistrationRecord {
            name: f.name.clone(),
            age: validation::parse_age(&f.age).unwrap_or_default(),
            email: f.email.clone(),
            password: f.password.clone(),
            own_gender: f.own_gender.clone(),
            gender_preference: f.gender_preference.clone(),
            daily_routine: f.daily_routine.clone(),
            priorities: f.priorities.clone(),
            wake_up_time: f.wake_up_time.clone(),
            bed_time: f.bed_time.clone(),
            home_space_use: f.home_space_use.clone(),
            biggest_stressors: f.biggest_stressors.clone(),
            worst_habit: f.worst_habit.clone(),
            deal_breakers: f.deal_breakers.clone(),
            neatness_preference: f.neatness_preference.clone(),
            pets: f.pets.clone(),
            overnight_guests: f.overnight_guests.clone(),
            confrontation_style: f.confrontation_style.clone(),
            sunday_night_activity: f.sunday_night_activity.clone(),
            roommate_self_assessment: f.roommate_self_assessment.clone(),
            move_in_date: f.move_in_date.clone(),
            move_out_date: f.move_out_date.clone(),
            country: place.country.clone(),
            state: place.state.clone(),
            city: place.city.clone(),
            images: self.images.data_urls(),
        })
    }

    /// Apply the backend's answer to a submitted record.
    pub fn finish(&mut self, result: Result<RegisterResponse, ApiError>) -> RegistrationOutcome {
        match result {
            Ok(response) => {
                tracing::info!("Registered {}", self.fields.email);
                self.reset();
                RegistrationOutcome::Created(response.message)
            }
            Err(ApiError::Server { status, message }) => {
                tracing::warn!("Registration rejected with status {}", status);
                RegistrationOutcome::Rejected(message.unwrap_or_else(|| SUBMIT_FAILED.to_string()))
            }
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                RegistrationOutcome::Failed(SUBMIT_ERROR.to_string())
            }
        }
    }

    /// Validate, send, and apply the answer.
    pub async fn submit<B: Backend>(&mut self, backend: &B) -> RegistrationOutcome {
        let record = match self.prepare() {
            Ok(record) => record,
            Err(errors) => return RegistrationOutcome::Invalid(errors),
        };
        let result = backend.register(&record).await;
        self.finish(result)
    }

    /// Empty every input and release the image previews.
    pub fn reset(&mut self) {
        self.fields = ProfileForm::default();
        self.location.clear_selection();
        self.images.clear();
    }
}
