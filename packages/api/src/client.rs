//! # Matching backend client
//!
//! [`Backend`] is the seam between the flows and the network. Each method is
//! exactly one request/response round trip; nothing is retried or cached.
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`login`](Backend::login) | `POST /api/login/` | none |
//! | [`current_user`](Backend::current_user) | `GET /api/user/` | bearer |
//! | [`register`](Backend::register) | `POST /api/register/` | none |
//! | [`search`](Backend::search) | `GET /api/search/` | bearer |
//! | [`record_swipe`](Backend::record_swipe) | `POST /api/searchview/` | bearer |
//!
//! [`RoomlyClient`] implements it on top of `reqwest`, which uses `fetch` when
//! compiled to wasm32 and hyper elsewhere. Responses are read as text first so a
//! non-2xx body can still yield its `message`, and so JSON shape errors are
//! reported as [`ApiError::Decode`] rather than transport failures.

use std::future::Future;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{message_from_body, ApiError};
use crate::models::{
    Candidate, LoginRequest, LoginResponse, RegisterResponse, RegistrationRecord,
    SearchResponse, SwipeDecision, UserProfile,
};

/// Requests the client makes to the matching backend.
pub trait Backend {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn current_user(&self, token: &str) -> impl Future<Output = Result<UserProfile, ApiError>>;
    fn register(
        &self,
        record: &RegistrationRecord,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>>;
    fn search(&self, token: &str) -> impl Future<Output = Result<Vec<Candidate>, ApiError>>;
    fn record_swipe(
        &self,
        token: &str,
        decision: &SwipeDecision,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// reqwest-backed [`Backend`].
#[derive(Debug, Clone)]
pub struct RoomlyClient {
    http: Client,
    base_url: String,
}

impl RoomlyClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Create a client from the `[api]` section of the client config.
    pub fn from_config(config: &store::ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Image sources from the backend may be server-relative (`/media/...`).
    pub fn media_url(&self, src: &str) -> String {
        if src.starts_with('/') && !src.starts_with("//") {
            self.url(src)
        } else {
            src.to_string()
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: message_from_body(&body),
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`read_json`](Self::read_json) but ignores the body of a 2xx.
    async fn expect_success(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(ApiError::Server {
            status: status.as_u16(),
            message: message_from_body(&body),
        })
    }
}

/// A 404 body that still carries `similar_users` is an answer, not an error.
fn empty_search_result(body: &str) -> Option<Vec<Candidate>> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("similar_users")?;
    serde_json::from_value::<SearchResponse>(value)
        .ok()
        .map(|parsed| parsed.similar_users)
}

impl Backend for RoomlyClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/login/"))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .http
            .get(self.url("/api/user/"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn register(&self, record: &RegistrationRecord) -> Result<RegisterResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/register/"))
            .json(record)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn search(&self, token: &str) -> Result<Vec<Candidate>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/search/"))
            .bearer_auth(token)
            .send()
            .await?;

        // The backend answers "no matches" with a 404 carrying an empty list.
        if response.status() == StatusCode::NOT_FOUND {
            let body = response.text().await?;
            return match empty_search_result(&body) {
                Some(users) => Ok(users),
                None => Err(ApiError::Server {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    message: message_from_body(&body),
                }),
            };
        }

        let parsed: SearchResponse = Self::read_json(response).await?;
        Ok(parsed.similar_users)
    }

    async fn record_swipe(&self, token: &str, decision: &SwipeDecision) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/searchview/"))
            .bearer_auth(token)
            .json(decision)
            .send()
            .await?;
        Self::expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalised() {
        let client = RoomlyClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/login/"), "http://localhost:8000/api/login/");
    }

    #[test]
    fn test_media_url() {
        let client = RoomlyClient::new("http://localhost:8000");
        assert_eq!(
            client.media_url("/media/ada.png"),
            "http://localhost:8000/media/ada.png"
        );
        assert_eq!(client.media_url("data:image/png;base64,AA"), "data:image/png;base64,AA");
        assert_eq!(client.media_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
        assert_eq!(client.media_url("//cdn.example/a.png"), "//cdn.example/a.png");
    }

    #[test]
    fn test_not_found_with_empty_list() {
        let users = empty_search_result(
            r#"{"similar_users": [], "message": "No similar users found."}"#,
        );
        assert_eq!(users, Some(vec![]));

        assert!(empty_search_result(r#"{"detail": "Not found."}"#).is_none());
        assert!(empty_search_result("Not Found").is_none());
    }

    #[test]
    fn test_from_config() {
        let config = store::ClientConfig::new("https://roomly.example".to_string());
        let client = RoomlyClient::from_config(&config);
        assert_eq!(client.url("/api/search/"), "https://roomly.example/api/search/");
    }
}
