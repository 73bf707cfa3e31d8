//! Well-known keys in durable client storage.

/// Access token issued by the login endpoint.
pub const TOKEN_KEY: &str = "token";

/// Email of the authenticated user, used as `swiped_by_email`.
pub const EMAIL_KEY: &str = "userEmail";
