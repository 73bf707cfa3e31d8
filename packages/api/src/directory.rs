//! # Geographic directory client
//!
//! The registration form's country → state → city selects are fed by an
//! external directory service. It uses its own credential: a long-lived API
//! token plus account email (from `[directory]` in `roomly.toml`) are exchanged
//! for a short-lived bearer token, which then authorises the three list calls.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`access_token`](Directory::access_token) | `GET {base}/getaccesstoken` with `api-token` and `user-email` headers |
//! | [`countries`](Directory::countries) | `GET {base}/countries` |
//! | [`states`](Directory::states) | `GET {base}/states/{country}` |
//! | [`cities`](Directory::cities) | `GET {base}/cities/{state}` |
//!
//! Names are returned in the directory's own order.

use std::future::Future;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::{message_from_body, ApiError};
use crate::models::location::AccessTokenResponse;
use crate::models::{CityEntry, CountryEntry, StateEntry};

/// Lookups against the geographic directory.
pub trait Directory {
    fn access_token(&self) -> impl Future<Output = Result<String, ApiError>>;
    fn countries(&self, credential: &str) -> impl Future<Output = Result<Vec<String>, ApiError>>;
    fn states(
        &self,
        credential: &str,
        country: &str,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>>;
    fn cities(
        &self,
        credential: &str,
        state: &str,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>>;
}

/// reqwest-backed [`Directory`].
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    api_token: String,
    user_email: String,
}

impl DirectoryClient {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            user_email: user_email.into(),
        }
    }

    /// Create a client from the `[directory]` section of the client config.
    pub fn from_config(config: &store::ClientConfig) -> Self {
        Self::new(
            config.directory.base_url.clone(),
            config.directory.api_token.clone(),
            config.directory.user_email.clone(),
        )
    }

    /// `{base}/{segments...}` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::Transport(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        credential: &str,
        segments: &[&str],
    ) -> Result<Vec<T>, ApiError> {
        let response = self
            .http
            .get(self.url(segments)?)
            .bearer_auth(credential)
            .header("Accept", "application/json")
            .send()
            .await?;
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
}

impl Directory for DirectoryClient {
    async fn access_token(&self) -> Result<String, ApiError> {
        let response = self
            .http
            .get(self.url(&["getaccesstoken"])?)
            .header("Accept", "application/json")
            .header("api-token", &self.api_token)
            .header("user-email", &self.user_email)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: message_from_body(&body),
            });
        }
        let parsed: AccessTokenResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.auth_token)
    }

    async fn countries(&self, credential: &str) -> Result<Vec<String>, ApiError> {
        let entries: Vec<CountryEntry> = self.get_list(credential, &["countries"]).await?;
        Ok(entries.into_iter().map(|e| e.country_name).collect())
    }

    async fn states(&self, credential: &str, country: &str) -> Result<Vec<String>, ApiError> {
        let entries: Vec<StateEntry> = self.get_list(credential, &["states", country]).await?;
        Ok(entries.into_iter().map(|e| e.state_name).collect())
    }

    async fn cities(&self, credential: &str, state: &str) -> Result<Vec<String>, ApiError> {
        let entries: Vec<CityEntry> = self.get_list(credential, &["cities", state]).await?;
        Ok(entries.into_iter().map(|e| e.city_name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DirectoryClient {
        DirectoryClient::new("https://www.universal-tutorial.com/api/", "tok", "dev@example.com")
    }

    #[test]
    fn test_urls_are_segment_encoded() {
        let client = client();
        assert_eq!(
            client.url(&["countries"]).unwrap().as_str(),
            "https://www.universal-tutorial.com/api/countries"
        );
        assert_eq!(
            client.url(&["states", "United States"]).unwrap().as_str(),
            "https://www.universal-tutorial.com/api/states/United%20States"
        );
        assert_eq!(
            client.url(&["cities", "Île-de-France/Paris"]).unwrap().as_str(),
            "https://www.universal-tutorial.com/api/cities/%C3%8Ele-de-France%2FParis"
        );
    }

    #[test]
    fn test_bad_base_url() {
        let client = DirectoryClient::new("not a url", "", "");
        assert!(matches!(client.url(&["countries"]), Err(ApiError::Transport(_))));
    }
}
