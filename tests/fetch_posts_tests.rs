//! Integration tests for the GraphQL product fetch against a mock endpoint.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use producthunt_digest::{
    extract_posts, fetch_posts, AccessToken, ClientId, ClientSecret, Config, HttpSession,
    QueryError, QueryWindow,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> Config {
    Config::builder()
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .api_base(server.uri())
        .web_base(server.uri())
        .priming_delay(Duration::ZERO)
        .build()
        .unwrap()
}

fn two_edge_payload() -> serde_json::Value {
    serde_json::json!({
        "data": { "posts": { "edges": [
            { "node": {
                "name": "Alpha",
                "tagline": "First product",
                "url": "https://www.producthunt.com/posts/alpha",
                "votesCount": 120,
                "createdAt": "2024-06-10T08:00:00Z"
            }},
            { "node": {
                "name": "Beta",
                "tagline": "Second product",
                "url": "https://www.producthunt.com/posts/beta",
                "votesCount": 80,
                "createdAt": "2024-06-11T08:00:00Z"
            }}
        ]}}
    })
}

#[tokio::test]
async fn test_fetch_returns_decoded_payload_unchanged() {
    let server = MockServer::start().await;
    let payload = two_edge_payload();

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");

    let result = fetch_posts(&session, &config, &token, &QueryWindow::default())
        .await
        .unwrap();

    // Passthrough: deep-equal to what the server sent
    assert_eq!(result, payload);
}

#[tokio::test]
async fn test_fetch_sends_bearer_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .and(header("Authorization", "Bearer tok_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_edge_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");

    let result = fetch_posts(&session, &config, &token, &QueryWindow::default()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_fetch_query_contains_window_parameters_and_posted_after() {
    let server = MockServer::start().await;

    // The request body must carry today's computed postedAfter bound.
    let expected_date = (Utc::now() - ChronoDuration::days(7))
        .format("%Y-%m-%dT00:00:00Z")
        .to_string();

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .and(body_string_contains("first: 5, order: VOTES"))
        .and(body_string_contains(&expected_date))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_edge_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");
    let window = QueryWindow {
        days_ago: 7,
        limit: 5,
        ..QueryWindow::default()
    };

    let result = fetch_posts(&session, &config, &token, &window).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_non_200_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "unauthorized"
            })),
        )
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_bad");

    let result = fetch_posts(&session, &config, &token, &QueryWindow::default()).await;

    match result {
        Err(QueryError::Status {
            status,
            body_excerpt,
        }) => {
            assert_eq!(status, 401);
            assert!(body_excerpt.contains("unauthorized"));
        }
        other => panic!("Expected QueryError::Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_200_body_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");

    let result = fetch_posts(&session, &config, &token, &QueryWindow::default()).await;

    assert!(matches!(result, Err(QueryError::Decode { .. })));
}

#[tokio::test]
async fn test_graphql_errors_envelope_passes_through_untouched() {
    let server = MockServer::start().await;
    let payload = serde_json::json!({
        "errors": [{ "message": "Your token is expired" }]
    });

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");

    // A 200 with a GraphQL errors field is not a fetch-layer failure.
    let result = fetch_posts(&session, &config, &token, &QueryWindow::default())
        .await
        .unwrap();
    assert_eq!(result, payload);

    // The typed view then reports the envelope as unusable.
    assert!(extract_posts(&result).is_none());
}

#[tokio::test]
async fn test_empty_edges_is_success_not_failure() {
    let server = MockServer::start().await;
    let payload = serde_json::json!({ "data": { "posts": { "edges": [] } } });

    Mock::given(method("POST"))
        .and(path("/v2/api/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");

    let result = fetch_posts(&session, &config, &token, &QueryWindow::default())
        .await
        .unwrap();

    let posts = extract_posts(&result).unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_network_error_maps_to_network_variant() {
    let config = Config::builder()
        .client_id(ClientId::new("id").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .api_base("http://127.0.0.1:1")
        .web_base("http://127.0.0.1:1")
        .priming_delay(Duration::ZERO)
        .build()
        .unwrap();
    let session = HttpSession::new(&config);
    let token = AccessToken::new("tok_abc");

    let result = fetch_posts(&session, &config, &token, &QueryWindow::default()).await;

    assert!(matches!(result, Err(QueryError::Network(_))));
}
