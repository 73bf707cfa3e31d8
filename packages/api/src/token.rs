//! # Access token inspection
//!
//! The backend issues JWTs. The client never verifies signatures (it holds no
//! key); it only reads the `exp` claim so an action that needs a live session can
//! be refused locally instead of round-tripping to a guaranteed 401.
//!
//! [`check_fresh`] is the single place expiry is decided. Its three failure modes
//! map to the messages in [`auth_message`]:
//!
//! | Condition | Error |
//! |-----------|-------|
//! | no token stored | [`ApiError::NotAuthenticated`] |
//! | payload not base64url JSON with an integer `exp` | [`ApiError::InvalidToken`] |
//! | `exp < now` | [`ApiError::SessionExpired`] |

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::ApiError;

pub const NOT_AUTHENTICATED: &str = "User not authenticated. Please log in.";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const INVALID_TOKEN: &str = "Invalid token. Please log in.";

/// Claims the client cares about.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Claims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    #[serde(default)]
    pub user_id: Option<serde_json::Value>,
}

/// Decode the payload segment of a JWT.
pub fn decode_claims(token: &str) -> Result<Claims, ApiError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
        return Err(ApiError::InvalidToken("expected header.payload.signature".to_string()));
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ApiError::InvalidToken(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidToken(e.to_string()))
}

/// Check that a stored token exists and has not expired at `now` (Unix seconds).
pub fn check_fresh(token: Option<&str>, now: i64) -> Result<Claims, ApiError> {
    let token = token.ok_or(ApiError::NotAuthenticated)?;
    let claims = decode_claims(token)?;
    if claims.exp < now {
        return Err(ApiError::SessionExpired);
    }
    Ok(claims)
}

/// Current Unix time in seconds, the `now` every freshness check uses.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// User-facing text for the auth failures produced by [`check_fresh`].
pub fn auth_message(err: &ApiError) -> Option<&'static str> {
    match err {
        ApiError::NotAuthenticated => Some(NOT_AUTHENTICATED),
        ApiError::SessionExpired => Some(SESSION_EXPIRED),
        ApiError::InvalidToken(_) => Some(INVALID_TOKEN),
        _ => None,
    }
}

/// Build an unsigned token with the given expiry. Test helper.
#[cfg(test)]
pub(crate) fn fake_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"token_type":"access","exp":{exp},"user_id":7}}"#));
    format!("{header}.{payload}.signature")
}
