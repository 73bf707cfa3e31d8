use serde::{Deserialize, Serialize};

/// Body of `POST /api/login/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: a JWT access token, and optionally the account email.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful registration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}
