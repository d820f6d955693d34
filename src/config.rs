//! SDK configuration
//!
//! The SDK is configured from a YAML document:
//!
//! ```yaml
//! url: https://api.raito.cloud/query
//! auth:
//!   type: bearer
//!   token: ${RAITO_TOKEN}
//! http:
//!   timeout_seconds: 30
//!   max_retries: 3
//!   backoff:
//!     type: exponential
//!     initial_ms: 100
//!     max_ms: 60000
//!   rate_limit:
//!     requests_per_second: 10
//!     burst_size: 10
//! page_size: 25
//! ```
//!
//! `${VAR}` references are resolved from the environment before parsing.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::template;
use crate::types::{BackoffType, LogLevel, StringMap};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete SDK configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// GraphQL endpoint
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub http: HttpSettings,

    /// Edges requested per page by every listing
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Default log level for the CLI
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl SdkConfig {
    /// Config for `url` with every other setting at its default
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: AuthConfig::default(),
            http: HttpSettings::default(),
            page_size: default_page_size(),
            log_level: LogLevel::default(),
        }
    }

    #[must_use]
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let rendered = if template::has_env_refs(yaml) {
            template::render_env(yaml)?
        } else {
            yaml.to_string()
        };

        let config: SdkConfig = serde_yaml::from_str(&rendered)?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!("failed to read '{}': {e}", path.display()))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reject configs that cannot produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::missing_field("url"));
        }
        url::Url::parse(&self.url)?;

        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        if self.http.backoff.initial_ms > self.http.backoff.max_ms {
            return Err(Error::config(
                "http.backoff.initial_ms cannot exceed http.backoff.max_ms",
            ));
        }
        Ok(())
    }

    /// Transport settings for [`crate::http::HttpClient`]
    pub fn http_client_config(&self) -> HttpClientConfig {
        let http = &self.http;
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.url)
            .timeout(Duration::from_secs(http.timeout_seconds))
            .max_retries(http.max_retries)
            .backoff(
                http.backoff.backoff_type,
                Duration::from_millis(http.backoff.initial_ms),
                Duration::from_millis(http.backoff.max_ms),
            );

        builder = match &http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        if let Some(agent) = &http.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &http.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Transport section of the config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default)]
    pub backoff: BackoffSettings,

    /// `null` disables client-side rate limiting
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: StringMap,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffSettings::default(),
            rate_limit: default_rate_limit(),
            user_agent: None,
            headers: StringMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

#[allow(clippy::unnecessary_wraps)]
fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

/// Retry backoff settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackoffSettings {
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffSettings {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_parse_minimal_config() {
        let config = SdkConfig::from_yaml_str("url: https://api.raito.cloud/query").unwrap();

        assert_eq!(config, SdkConfig::new("https://api.raito.cloud/query"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.http.max_retries, 3);
        assert!(config.http.rate_limit.is_some());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
url: https://api.raito.cloud/query
auth:
  type: api_key
  header_name: X-API-Key
  value: secret
http:
  timeout_seconds: 5
  max_retries: 1
  backoff:
    type: linear
    initial_ms: 50
    max_ms: 500
  rate_limit: null
  user_agent: raito-cli/test
  headers:
    X-Raito-Domain: acme
page_size: 100
log_level: DEBUG
";
        let config = SdkConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(
            config.auth,
            AuthConfig::ApiKey {
                header_name: Some("X-API-Key".to_string()),
                prefix: None,
                value: "secret".to_string(),
            }
        );
        assert_eq!(config.page_size, 100);
        assert_eq!(config.log_level, LogLevel::Debug);

        let http = config.http_client_config();
        assert_eq!(http.base_url.as_deref(), Some("https://api.raito.cloud/query"));
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.max_retries, 1);
        assert_eq!(http.backoff_type, BackoffType::Linear);
        assert_eq!(http.initial_backoff, Duration::from_millis(50));
        assert_eq!(http.max_backoff, Duration::from_millis(500));
        assert!(http.rate_limit.is_none());
        assert_eq!(http.user_agent, "raito-cli/test");
        assert_eq!(
            http.default_headers.get("X-Raito-Domain").map(String::as_str),
            Some("acme")
        );
    }

    #[test]
    fn test_env_interpolation() {
        std::env::set_var("RAITO_SDK_TEST_TOKEN", "from-env");
        let config = SdkConfig::from_yaml_str(
            "url: https://api.raito.cloud/query\nauth:\n  type: bearer\n  token: ${RAITO_SDK_TEST_TOKEN}\n",
        )
        .unwrap();

        assert_eq!(
            config.auth,
            AuthConfig::Bearer {
                token: "from-env".to_string()
            }
        );
    }

    #[test]
    fn test_env_interpolation_missing_var() {
        let err = SdkConfig::from_yaml_str(
            "url: https://api.raito.cloud/query\nauth:\n  type: bearer\n  token: ${RAITO_SDK_TEST_UNSET_VAR}\n",
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("RAITO_SDK_TEST_UNSET_VAR"));
    }

    #[test_case("page_size: 1" ; "missing url")]
    #[test_case("url: ''" ; "empty url")]
    #[test_case("url: not a url" ; "invalid url")]
    #[test_case("url: https://api.raito.cloud/query\npage_size: 0" ; "zero page size")]
    #[test_case("url: https://x.test\nhttp:\n  backoff:\n    initial_ms: 10\n    max_ms: 1" ; "inverted backoff")]
    fn test_invalid_config(yaml: &str) {
        let err = SdkConfig::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = SdkConfig::from_yaml_str("url: [unterminated").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: https://api.raito.cloud/query").unwrap();
        writeln!(file, "page_size: 10").unwrap();

        let config = SdkConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SdkConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
