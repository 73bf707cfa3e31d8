//! Error taxonomy for every backend and directory call.

use thiserror::Error;

/// Why a request (or the check that guards it) did not succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No access token in durable storage.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The token's `exp` claim is in the past.
    #[error("session expired")]
    SessionExpired,

    /// The stored token could not be decoded.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The request never produced a response (network, CORS, bad URL).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response; `message` is the body's `message` field when present.
    #[error("server returned {status}")]
    Server { status: u16, message: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True for the failures that block an action before any network call.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::SessionExpired | ApiError::InvalidToken(_)
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Pull a `message` string out of an error body, if the body is JSON and has one.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            message_from_body(r#"{"message": "Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert!(message_from_body(r#"{"error": "nope"}"#).is_none());
        assert!(message_from_body(r#"{"message": 42}"#).is_none());
        assert!(message_from_body("<html>502</html>").is_none());
        assert!(message_from_body("").is_none());
    }

    #[test]
    fn test_server_message_and_auth_kinds() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Email taken".to_string()),
        };
        assert_eq!(err.server_message(), Some("Email taken"));
        assert!(!err.is_auth());

        assert!(ApiError::NotAuthenticated.is_auth());
        assert!(ApiError::SessionExpired.is_auth());
        assert!(ApiError::InvalidToken("bad".to_string()).is_auth());
        assert!(!ApiError::Transport("offline".to_string()).is_auth());
        assert!(ApiError::Transport("offline".to_string()).server_message().is_none());
    }
}
