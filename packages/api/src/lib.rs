//! # API crate: typed client and flows for Roomly
//!
//! Everything the frontends need that is not markup lives here: the HTTP client
//! for the matching backend, the client for the geographic directory, the domain
//! models, and the state machines behind each page.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Backend`] trait and its reqwest implementation [`RoomlyClient`] (`/api/login/`, `/api/user/`, `/api/register/`, `/api/search/`, `/api/searchview/`) |
//! | [`directory`] | [`Directory`] trait and [`DirectoryClient`] for countries, states and cities |
//! | [`error`] | [`ApiError`], the transport/server/auth taxonomy shared by every flow |
//! | [`models`] | Wire types: profiles, candidates, swipe decisions, location entries, choice sets |
//! | [`token`] | Client-side decoding of the access token's `exp` claim |
//! | [`session`] | [`Session`], login/logout, and the route gate |
//! | [`registration`] | Form validation, cascading location selection, image attachments, submission |
//! | [`profile`] | Loading the signed-in user's own profile |
//! | [`deck`] | The swipe deck: candidate queue, cursor, verdicts |
//!
//! Flows are generic over [`Backend`], [`Directory`] and [`store::SessionStore`], so
//! the same code runs behind Dioxus components and against in-memory fakes in tests.

pub mod client;
pub mod deck;
pub mod directory;
pub mod error;
pub mod models;
pub mod profile;
pub mod registration;
pub mod session;
pub mod token;

pub use client::{Backend, RoomlyClient};
pub use deck::{DeckPhase, SwipeDeck, SwipeStep};
pub use directory::{Directory, DirectoryClient};
pub use error::ApiError;
pub use models::{Candidate, SwipeDecision, UserProfile, Verdict};
pub use registration::{ProfileForm, RegistrationForm, RegistrationOutcome};
pub use session::{GateDecision, Session};

pub use store::ClientConfig;
