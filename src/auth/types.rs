//! Auth configuration types
//!
//! `AuthConfig` is read straight from the `auth:` section of the SDK config,
//! after `${VAR}` interpolation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How requests to the Raito API are authenticated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// API key sent in a header
    ApiKey {
        /// Defaults to `Authorization`
        #[serde(default)]
        header_name: Option<String>,
        /// Prepended to the value, e.g. `"Token "`
        #[serde(default)]
        prefix: Option<String>,
        value: String,
    },

    /// HTTP Basic authentication
    Basic { username: String, password: String },

    /// Static bearer token
    Bearer { token: String },

    /// OAuth2 client credentials flow
    #[serde(rename = "oauth2_client_credentials")]
    Oauth2ClientCredentials {
        token_url: String,
        client_id: String,
        client_secret: String,
        #[serde(default)]
        scopes: Vec<String>,
        /// Extra form fields for the token request
        #[serde(default)]
        token_body: HashMap<String, String>,
    },

    /// Fixed headers added to every request
    CustomHeaders { headers: HashMap<String, String> },
}

impl AuthConfig {
    /// Whether this config fetches and caches tokens
    pub fn needs_token(&self) -> bool {
        matches!(self, Self::Oauth2ClientCredentials { .. })
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// A token that expires `seconds` from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Expired, or expiring within the next 30 seconds
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + chrono::Duration::seconds(30) >= expires_at,
            None => false,
        }
    }
}
