//! Tests for the auth module

use super::*;
use crate::error::Error;
use std::collections::HashMap;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn authorization_header(auth: &Authenticator) -> Option<String> {
    let req = reqwest::Client::new().post("https://api.raito.cloud/query");
    let built = auth.apply(req).await.unwrap().build().unwrap();
    built
        .headers()
        .get("Authorization")
        .map(|v| v.to_str().unwrap().to_string())
}

fn client_credentials(server: &MockServer) -> AuthConfig {
    AuthConfig::Oauth2ClientCredentials {
        token_url: format!("{}/oauth/token", server.uri()),
        client_id: "raito-client".to_string(),
        client_secret: "raito-secret".to_string(),
        scopes: vec![],
        token_body: HashMap::new(),
    }
}

#[tokio::test]
async fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    assert_eq!(authorization_header(&auth).await, None);
}

#[tokio::test]
async fn test_api_key_default_header_with_prefix() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        header_name: None,
        prefix: Some("Token ".to_string()),
        value: "key-123".to_string(),
    });

    assert_eq!(
        authorization_header(&auth).await.as_deref(),
        Some("Token key-123")
    );
}

#[tokio::test]
async fn test_api_key_custom_header() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        header_name: Some("X-API-Key".to_string()),
        prefix: None,
        value: "key-123".to_string(),
    });

    let req = reqwest::Client::new().get("https://api.raito.cloud/query");
    let built = auth.apply(req).await.unwrap().build().unwrap();
    assert_eq!(built.headers().get("X-API-Key").unwrap(), "key-123");
    assert!(built.headers().get("Authorization").is_none());
}

#[tokio::test]
async fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "user".to_string(),
        password: "pass".to_string(),
    });

    // base64("user:pass")
    assert_eq!(
        authorization_header(&auth).await.as_deref(),
        Some("Basic dXNlcjpwYXNz")
    );
}

#[tokio::test]
async fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::Bearer {
        token: "my-bearer-token".to_string(),
    });

    assert_eq!(
        authorization_header(&auth).await.as_deref(),
        Some("Bearer my-bearer-token")
    );
}

#[tokio::test]
async fn test_custom_headers() {
    let headers = HashMap::from([
        ("X-Raito-Domain".to_string(), "acme".to_string()),
        ("X-Raito-User".to_string(), "ops".to_string()),
    ]);
    let auth = Authenticator::new(AuthConfig::CustomHeaders { headers });

    let req = reqwest::Client::new().get("https://api.raito.cloud/query");
    let built = auth.apply(req).await.unwrap().build().unwrap();
    assert_eq!(built.headers().get("X-Raito-Domain").unwrap(), "acme");
    assert_eq!(built.headers().get("X-Raito-User").unwrap(), "ops");
}

#[tokio::test]
async fn test_oauth2_client_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=raito-client"))
        .and(body_string_contains("client_secret=raito-secret"))
        .and(body_string_contains("scope=read+write"))
        .and(body_string_contains("audience=raito"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "oauth-token-123",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(AuthConfig::Oauth2ClientCredentials {
        token_url: format!("{}/oauth/token", mock_server.uri()),
        client_id: "raito-client".to_string(),
        client_secret: "raito-secret".to_string(),
        scopes: vec!["read".to_string(), "write".to_string()],
        token_body: HashMap::from([("audience".to_string(), "raito".to_string())]),
    });

    assert_eq!(
        authorization_header(&auth).await.as_deref(),
        Some("Bearer oauth-token-123")
    );
}

#[tokio::test]
async fn test_oauth2_token_caching() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "cached-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(client_credentials(&mock_server));
    for _ in 0..3 {
        assert_eq!(
            authorization_header(&auth).await.as_deref(),
            Some("Bearer cached-token")
        );
    }
}

#[tokio::test]
async fn test_oauth2_expiring_token_is_refetched() {
    let mock_server = MockServer::start().await;

    // Expires inside the refresh buffer, so every request fetches again
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "short-lived",
            "expires_in": 5
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(client_credentials(&mock_server));
    authorization_header(&auth).await;
    authorization_header(&auth).await;
}

#[tokio::test]
async fn test_clear_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(client_credentials(&mock_server));
    authorization_header(&auth).await;
    auth.clear_cache().await;
    authorization_header(&auth).await;
}

#[tokio::test]
async fn test_oauth2_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_client"
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(client_credentials(&mock_server));
    let req = reqwest::Client::new().get("https://api.raito.cloud/query");
    let err = auth.apply(req).await.unwrap_err();

    assert!(matches!(err, Error::OAuth2 { .. }));
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("invalid_client"));
}
