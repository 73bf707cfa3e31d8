//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod services;
pub use services::{
    make_registration_form, make_store, use_services, Previews, Services, ServicesProvider,
};

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod candidate_card;
pub use candidate_card::CandidateCard;

pub mod swipe_card;
pub use swipe_card::{SwipeCard, SWIPE_THRESHOLD};

mod form_fields;
pub use form_fields::{AnswerField, SelectField, TextField};

pub mod image_picker;
pub use image_picker::ImagePicker;
