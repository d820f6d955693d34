//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: YAML config → RaitoClient → GraphQL requests → typed items

use futures::StreamExt;
use pretty_assertions::assert_eq;
use raito_sdk::pagination::{execute, ExtractedEdge, Page};
use raito_sdk::services::access_provider::{
    AccessProviderListOptions, AccessProviderOrderByInput, AccessProviderWhatListOptions,
};
use raito_sdk::{
    Context, Error, ErrorKind, ExecutionOutcome, ListItem, RaitoClient, Result, SdkConfig, Sort,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn config_yaml(server: &MockServer, auth: &str) -> String {
    format!(
        r"
url: {uri}/query
auth:
{auth}
http:
  max_retries: 2
  backoff:
    type: constant
    initial_ms: 10
    max_ms: 10
  rate_limit: null
page_size: 2
",
        uri = server.uri()
    )
}

fn client_from_yaml(yaml: &str) -> RaitoClient {
    let config = SdkConfig::from_yaml_str(yaml).unwrap();
    RaitoClient::new(&config).unwrap()
}

fn ap(id: &str) -> Value {
    json!({
        "__typename": "AccessProvider",
        "id": id,
        "name": format!("grant {id}"),
        "state": "ACTIVE",
        "action": "Grant"
    })
}

fn page(edges: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "__typename": "PagedResult",
        "pageInfo": {"hasNextPage": next.is_some(), "endCursor": next},
        "edges": edges
    })
}

fn data(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": body }))
}

// ============================================================================
// Access Provider Flows
// ============================================================================

#[tokio::test]
async fn test_list_access_providers_across_pages() {
    std::env::set_var("RAITO_IT_TOKEN", "env-token");
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("Authorization", "Bearer env-token"))
        .and(body_partial_json(json!({
            "operationName": "ListAccessProviders",
            "variables": {"after": null, "first": 2, "order": [{"name": "DESC"}]}
        })))
        .respond_with(data(json!({"accessProviders": page(
            vec![
                json!({"cursor": "c1", "node": ap("ap-1")}),
                json!({"cursor": "c2", "node": ap("ap-2")}),
            ],
            Some("c2"),
        )})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_partial_json(json!({
            "operationName": "ListAccessProviders",
            "variables": {"after": "c2", "first": 2}
        })))
        .respond_with(data(json!({"accessProviders": page(
            vec![
                json!({"cursor": "c3", "node": null}),
                json!({"cursor": "c4", "node": ap("ap-3")}),
            ],
            None,
        )})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_from_yaml(&config_yaml(
        &server,
        "  type: bearer\n  token: ${RAITO_IT_TOKEN}",
    ));
    let options = AccessProviderListOptions::default().with_order([AccessProviderOrderByInput {
        name: Some(Sort::Desc),
        ..Default::default()
    }]);

    let ids: Vec<String> = client
        .access_provider()
        .list_access_providers(&Context::background(), options)
        .map(|item| item.into_result().map(|ap| ap.id))
        .collect::<Vec<Result<String>>>()
        .await
        .into_iter()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(ids, vec!["ap-1", "ap-2", "ap-3"]);
}

#[tokio::test]
async fn test_get_access_provider_with_oauth2() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "oauth-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("Authorization", "Bearer oauth-token"))
        .and(body_partial_json(json!({
            "operationName": "GetAccessProvider",
            "variables": {"id": "ap-7"}
        })))
        .respond_with(data(json!({"accessProvider": ap("ap-7")})))
        .expect(2)
        .mount(&server)
        .await;

    let auth = format!(
        "  type: oauth2_client_credentials\n  token_url: {}/oauth/token\n  client_id: id\n  client_secret: secret",
        server.uri()
    );
    let client = client_from_yaml(&config_yaml(&server, &auth));
    let access_providers = client.access_provider();
    let ctx = Context::background();

    let first = access_providers.get_access_provider(&ctx, "ap-7").await.unwrap();
    let second = access_providers.get_access_provider(&ctx, "ap-7").await.unwrap();

    assert_eq!(first.name, "grant ap-7");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(data(json!({"accessProvider": ap("ap-1")})))
        .mount(&server)
        .await;

    let client = client_from_yaml(&config_yaml(&server, "  type: none"));
    let ap = client
        .access_provider()
        .get_access_provider(&Context::background(), "ap-1")
        .await
        .unwrap();

    assert_eq!(ap.id, "ap-1");
}

#[tokio::test]
async fn test_what_list_permission_denied_ends_listing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(data(json!({"accessProvider": {
            "__typename": "PermissionDeniedError",
            "message": "not allowed"
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_from_yaml(&config_yaml(&server, "  type: none"));
    let mut stream = client.access_provider().get_access_provider_what_data_object_list(
        &Context::background(),
        "ap-1",
        AccessProviderWhatListOptions::default(),
    );

    let err = stream.next_item().await.unwrap().into_result().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert!(stream.next_item().await.is_none());

    let summary = stream.finish().await.unwrap();
    assert_eq!(summary.outcome, ExecutionOutcome::Errored);
}

#[tokio::test]
async fn test_graphql_errors_surface_as_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "field 'nope' not found"}]
        })))
        .mount(&server)
        .await;

    let client = client_from_yaml(&config_yaml(&server, "  type: none"));
    let err = client
        .access_provider()
        .delete_access_provider(&Context::background(), "ap-1")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("nope"));
}

// ============================================================================
// Generic Executor
// ============================================================================

#[tokio::test]
async fn test_executor_with_custom_loader() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);

    let loader = move |_ctx: Context, cursor: Option<String>| {
        seen.fetch_add(1, Ordering::SeqCst);
        async move {
            let page = match cursor.as_deref() {
                None => Page::with_next("b", vec![1, 2]),
                Some("b") => Page::last(vec![3]),
                Some(other) => return Err(Error::protocol(format!("unexpected cursor {other}"))),
            };
            Ok(page)
        }
    };
    let extractor = |n: i32| -> Result<ExtractedEdge<String>> {
        Ok(ExtractedEdge::item(Some(n.to_string()), format!("item-{n}")))
    };

    let items = execute(&Context::background(), loader, extractor)
        .try_collect_items()
        .await
        .unwrap();

    assert_eq!(items, vec!["item-1", "item-2", "item-3"]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_executor_abandoned_when_consumer_stops() {
    let loader = |_ctx: Context, _cursor: Option<String>| async {
        Ok::<_, Error>(Page::with_next("more", vec![1, 2, 3]))
    };
    let extractor = |n: i32| -> Result<ExtractedEdge<i32>> { Ok(ExtractedEdge::item(None, n)) };

    let mut stream = execute(&Context::background(), loader, extractor);
    assert!(matches!(stream.next_item().await, Some(ListItem::Item(1))));

    let summary = stream.finish().await.unwrap();
    assert_eq!(summary.outcome, ExecutionOutcome::Abandoned);
    assert_eq!(summary.pages_fetched, 1);
}
