//! Authenticator implementation
//!
//! Applies an [`AuthConfig`] to outgoing requests and keeps the OAuth2 access
//! token cached until shortly before it expires.

use super::types::{AuthConfig, CachedToken};
use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Applies authentication to HTTP requests
pub struct Authenticator {
    config: AuthConfig,
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// Used for token requests
    http_client: Client,
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Share an existing connection pool for token requests
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::ApiKey {
                header_name,
                prefix,
                value,
            } => {
                let header = header_name.as_deref().unwrap_or("Authorization");
                let value = format!("{}{value}", prefix.as_deref().unwrap_or(""));
                Ok(req.header(header, value))
            }

            AuthConfig::Basic { username, password } => {
                Ok(req.basic_auth(username, Some(password)))
            }

            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token)),

            AuthConfig::Oauth2ClientCredentials { .. } => {
                let token = self.get_or_refresh_token().await?;
                Ok(req.bearer_auth(token))
            }

            AuthConfig::CustomHeaders { headers } => Ok(headers
                .iter()
                .fold(req, |req, (key, value)| req.header(key.as_str(), value.as_str()))),
        }
    }

    /// A valid token, fetching a new one if the cached one expired
    async fn get_or_refresh_token(&self) -> Result<String> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| !t.is_expired()) {
                return Ok(token.token.clone());
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = cached.as_ref().filter(|t| !t.is_expired()) {
            return Ok(token.token.clone());
        }

        let new_token = self.fetch_new_token().await?;
        let token = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token)
    }

    async fn fetch_new_token(&self) -> Result<CachedToken> {
        match &self.config {
            AuthConfig::Oauth2ClientCredentials {
                token_url,
                client_id,
                client_secret,
                scopes,
                token_body,
            } => {
                self.fetch_client_credentials(
                    token_url,
                    client_id,
                    client_secret,
                    scopes,
                    token_body,
                )
                .await
            }
            _ => Err(Error::auth("token refresh not supported for this auth type")),
        }
    }

    async fn fetch_client_credentials(
        &self,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
        scopes: &[String],
        extra_body: &HashMap<String, String>,
    ) -> Result<CachedToken> {
        debug!(token_url, client_id, "requesting OAuth2 access token");

        let mut form = vec![
            ("grant_type", "client_credentials".to_string()),
            ("client_id", client_id.to_string()),
            ("client_secret", client_secret.to_string()),
        ];
        if !scopes.is_empty() {
            form.push(("scope", scopes.join(" ")));
        }
        form.extend(extra_body.iter().map(|(k, v)| (k.as_str(), v.clone())));

        let response = self.http_client.post(token_url).form(&form).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::OAuth2 {
                message: format!("token request failed with status {status}: {body}"),
            });
        }

        let token_response: TokenResponse = response.json().await?;
        debug!(expires_in = ?token_response.expires_in, "received OAuth2 access token");
        Ok(token_response.into_cached_token())
    }

    /// Drop the cached token so the next request fetches a new one
    pub async fn clear_cache(&self) {
        *self.cached_token.write().await = None;
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

/// OAuth2 token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        }
    }
}
