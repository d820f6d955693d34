//! Top-level SDK client

use crate::config::SdkConfig;
use crate::error::Result;
use crate::graphql::GraphqlClient;
use crate::http::HttpClient;
use crate::services::AccessProviderClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point into the Raito API
///
/// Builds the HTTP and GraphQL stack once and hands out resource clients
/// sharing it.
#[derive(Clone)]
pub struct RaitoClient {
    graphql: Arc<GraphqlClient>,
    page_size: u32,
}

impl RaitoClient {
    /// Build a client from a validated config
    pub fn new(config: &SdkConfig) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::with_auth(config.http_client_config(), config.auth.clone())?;
        debug!(url = %config.url, page_size = config.page_size, "Raito client ready");

        Ok(Self {
            graphql: Arc::new(GraphqlClient::new(http)),
            page_size: config.page_size,
        })
    }

    /// Load the config at `path` and build a client from it
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::new(&SdkConfig::from_file(path)?)
    }

    /// Underlying GraphQL client
    pub fn graphql(&self) -> &Arc<GraphqlClient> {
        &self.graphql
    }

    /// Access provider operations
    pub fn access_provider(&self) -> AccessProviderClient {
        AccessProviderClient::new(Arc::clone(&self.graphql)).with_page_size(self.page_size)
    }
}

impl std::fmt::Debug for RaitoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaitoClient")
            .field("base_url", &self.graphql.http().config().base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_page_size_reaches_resource_clients() {
        let mut config = SdkConfig::new("https://api.raito.cloud/query");
        config.page_size = 7;

        let client = RaitoClient::new(&config).unwrap();
        assert_eq!(client.access_provider().page_size(), 7);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = RaitoClient::new(&SdkConfig::new("")).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = SdkConfig::new("https://api.raito.cloud/query").with_auth(
            crate::auth::AuthConfig::Bearer {
                token: "super-secret".to_string(),
            },
        );
        let client = RaitoClient::new(&config).unwrap();

        let debug = format!("{client:?}");
        assert!(debug.contains("api.raito.cloud"));
        assert!(!debug.contains("super-secret"));
    }
}
