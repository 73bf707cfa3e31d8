//! # Client configuration (`roomly.toml`)
//!
//! Tells the client where its two external collaborators live: the matching
//! backend (login, profile, registration, search, swipe decisions) and the
//! geographic directory that feeds the country → state → city selects.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [directory]
//! base_url = "https://www.universal-tutorial.com/api"
//! api_token = "..."      # issued by the directory service
//! user_email = "..."     # account the token belongs to
//! ```
//!
//! Every section and field has a default, so an empty file is the default
//! configuration. The web binary embeds the workspace `roomly.toml` at build
//! time and falls back to [`ClientConfig::default`] if it does not parse.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `roomly.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Matching backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend, without the `/api/...` path.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

/// Geographic directory settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_directory_base_url")]
    pub base_url: String,
    /// Long-lived token exchanged for a short-lived access credential.
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub user_email: String,
}

fn default_directory_base_url() -> String {
    "https://www.universal-tutorial.com/api".to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_directory_base_url(),
            api_token: String::new(),
            user_email: String::new(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(api_base_url: String) -> Self {
        Self {
            api: ApiConfig {
                base_url: api_base_url,
            },
            directory: DirectoryConfig::default(),
        }
    }

    /// Builder method to set directory credentials.
    pub fn with_directory_credentials(mut self, api_token: String, user_email: String) -> Self {
        self.directory.api_token = api_token;
        self.directory.user_email = user_email;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "roomly.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default client config: {}", e);
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(
            config.directory.base_url,
            "https://www.universal-tutorial.com/api"
        );
        assert!(config.directory.api_token.is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [directory]
            api_token = "tok"
            user_email = "dev@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.directory.api_token, "tok");
        assert_eq!(config.directory.user_email, "dev@example.com");
        assert_eq!(
            config.directory.base_url,
            "https://www.universal-tutorial.com/api"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://roomly.example".to_string())
            .with_directory_credentials("tok".to_string(), "dev@example.com".to_string());
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_workspace_config_parses() {
        let config = ClientConfig::from_toml(include_str!("../../../roomly.toml")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.directory.base_url, DirectoryConfig::default().base_url);
        // Credentials are per developer; the checked-in file ships them blank
        assert!(config.directory.api_token.is_empty());
        assert!(config.directory.user_email.is_empty());
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = ClientConfig::from_toml_or_default("[api\nbase_url = ");
        assert_eq!(config, ClientConfig::default());
    }
}
