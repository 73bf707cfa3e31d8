//! Wire and domain models shared by the client and the flows.

pub mod auth;
pub mod choices;
pub mod location;
pub mod profile;
pub mod swipe;

pub use auth::{LoginRequest, LoginResponse, RegisterResponse};
pub use choices::{Gender, GenderPreference, GuestPolicy, Neatness, PetPreference};
pub use location::{CityEntry, CountryEntry, StateEntry};
pub use profile::{Candidate, RegistrationRecord, UserProfile};
pub use swipe::{SearchResponse, SwipeDecision, Verdict};
