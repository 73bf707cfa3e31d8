//! Loading the signed-in user's own profile.

use crate::client::Backend;
use crate::models::UserProfile;
use crate::session::Session;
use crate::token::NOT_AUTHENTICATED;

pub const PROFILE_ERROR: &str = "Error fetching user data. Please try again.";

/// Fetch the profile for the stored token. Without a session nothing is sent.
///
/// The error is the text to show in place of the profile.
pub async fn load_own_profile<B: Backend>(
    backend: &B,
    session: Option<&Session>,
) -> Result<UserProfile, String> {
    let Some(session) = session else {
        tracing::warn!("No token stored; not fetching profile");
        return Err(NOT_AUTHENTICATED.to_string());
    };
    backend.current_user(&session.token).await.map_err(|e| {
        tracing::error!("Error fetching user data: {}", e);
        PROFILE_ERROR.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::session::tests::FakeBackend;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            email: Some("ada@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_no_session_no_fetch() {
        let backend = FakeBackend::default();
        let err = load_own_profile(&backend, None).await.unwrap_err();
        assert_eq!(err, NOT_AUTHENTICATED);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_loads_with_bearer_token() {
        let backend = FakeBackend {
            user_result: Some(Ok(UserProfile {
                name: Some("Ada".to_string()),
                ..Default::default()
            })),
            ..Default::default()
        };
        let profile = load_own_profile(&backend, Some(&session())).await.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(*backend.calls.borrow(), vec!["user tok"]);
    }

    #[tokio::test]
    async fn test_failures_show_one_message() {
        for failure in [
            ApiError::Server {
                status: 401,
                message: Some("Given token not valid".to_string()),
            },
            ApiError::Transport("offline".to_string()),
            ApiError::Decode("missing field".to_string()),
        ] {
            let backend = FakeBackend {
                user_result: Some(Err(failure)),
                ..Default::default()
            };
            let err = load_own_profile(&backend, Some(&session())).await.unwrap_err();
            assert_eq!(err, PROFILE_ERROR);
        }
    }
}
