//! # Session: token, login, logout and the route gate
//!
//! A [`Session`] is the explicit form of "logged in": the access token and the
//! account email as persisted in the [`SessionStore`]. The login flow is its only
//! writer. Readers obtain it with [`Session::load`] and ask
//! [`Session::check_fresh`] before any action that needs a live token, so expiry
//! is decided in one place.
//!
//! [`gate`] is the pure routing rule applied by the app shell: authenticated
//! users never see the login form, anonymous users only see login and
//! registration.

use store::{SessionStore, EMAIL_KEY, TOKEN_KEY};

use crate::client::Backend;
use crate::error::ApiError;
use crate::models::LoginRequest;
use crate::token::{self, Claims};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const LOGIN_ERROR: &str = "An error occurred. Please try again.";

/// Credentials held by a signed-in client.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub email: Option<String>,
}

impl Session {
    /// Read the session from durable storage. `None` when no token is stored.
    pub async fn load<S: SessionStore>(store: &S) -> Option<Session> {
        let token = store.get(TOKEN_KEY).await?;
        let email = store.get(EMAIL_KEY).await;
        Some(Session { token, email })
    }

    /// Decode the token and check its `exp` against `now` (Unix seconds).
    pub fn check_fresh(&self, now: i64) -> Result<Claims, ApiError> {
        token::check_fresh(Some(&self.token), now)
    }
}

/// Check an optional session, treating `None` as "not authenticated".
pub fn require_fresh(session: Option<&Session>, now: i64) -> Result<Claims, ApiError> {
    token::check_fresh(session.map(|s| s.token.as_str()), now)
}

/// Submit credentials and persist the issued token on success.
///
/// The returned error is the text to show the user: the server's `message`
/// when it sent one, a generic failure otherwise. Nothing is retried.
pub async fn login<B: Backend, S: SessionStore>(
    backend: &B,
    store: &S,
    email: &str,
    password: &str,
) -> Result<Session, String> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    match backend.login(&request).await {
        Ok(response) => {
            let email = response
                .email
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| email.to_string());
            store.set(TOKEN_KEY, &response.access).await;
            store.set(EMAIL_KEY, &email).await;
            tracing::info!("Logged in as {}", email);
            Ok(Session {
                token: response.access,
                email: Some(email),
            })
        }
        Err(ApiError::Server { status, message }) => {
            tracing::warn!("Login rejected with status {}", status);
            Err(message.unwrap_or_else(|| LOGIN_FAILED.to_string()))
        }
        Err(e) => {
            tracing::error!("Login error: {}", e);
            Err(LOGIN_ERROR.to_string())
        }
    }
}

/// Forget the stored credentials.
pub async fn logout<S: SessionStore>(store: &S) {
    store.remove(TOKEN_KEY).await;
    store.remove(EMAIL_KEY).await;
}

/// Paths of the two shells.
pub mod paths {
    pub const HOME: &str = "/";
    pub const PROFILE: &str = "/profile";
    pub const SEARCH: &str = "/search";
    pub const MATCHES: &str = "/matches";
    pub const CHATS: &str = "/chats";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";

    pub const AUTHENTICATED: &[&str] = &[HOME, PROFILE, SEARCH, MATCHES, CHATS];
    pub const ANONYMOUS: &[&str] = &[LOGIN, REGISTER];
}

/// What the shell should do with a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(&'static str),
}

/// Route gate: which shell owns `path` given the authentication flag.
pub fn gate(authenticated: bool, path: &str) -> GateDecision {
    let path = match path.trim_end_matches('/') {
        "" => paths::HOME,
        trimmed => trimmed,
    };
    if authenticated {
        if paths::AUTHENTICATED.contains(&path) {
            GateDecision::Render
        } else {
            GateDecision::Redirect(paths::HOME)
        }
    } else if paths::ANONYMOUS.contains(&path) {
        GateDecision::Render
    } else {
        GateDecision::Redirect(paths::LOGIN)
    }
}
