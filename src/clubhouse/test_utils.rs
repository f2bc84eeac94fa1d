//! Test utilities for exercising the client and jobs against wiremock.
//!
//! ```ignore
//! let server = MockServer::start().await;
//! mount_story_search(&server, ApiVersion::V2, json!({"archived": true}), json!([{"id": 3}]), 1).await;
//! mount_deletes(&server, r"^/v2/stories/\d+$", 1).await;
//!
//! let client = client_for(&server);
//! // ... run a job
//! assert_eq!(request_paths(&server, "DELETE").await, vec!["/v2/stories/3"]);
//! ```

// Not every helper is used by every test module.
#![allow(dead_code)]

use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, path_regex, query_param},
};

use super::{ApiToken, ApiVersion, ClubhouseClient};
use crate::config::ApiConfig;

pub const TEST_TOKEN: &str = "abc123";

/// Client pointed at the mock server, authenticated with [`TEST_TOKEN`].
pub fn client_for(server: &MockServer) -> ClubhouseClient {
    client_with_timeout(server, ApiConfig::default().timeout_secs)
}

pub fn client_with_timeout(server: &MockServer, timeout_secs: u64) -> ClubhouseClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs,
    };
    ClubhouseClient::new(&config, ApiToken::new(TEST_TOKEN)).expect("client should build")
}

/// Answer a story search with `filter` as its body with `stories`.
pub async fn mount_story_search(
    server: &MockServer,
    version: ApiVersion,
    filter: Value,
    stories: Value,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(format!("/{}/stories/search", version.as_str())))
        .and(query_param("token", TEST_TOKEN))
        .and(body_json(filter))
        .respond_with(ResponseTemplate::new(200).set_body_json(stories))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub async fn mount_epic_list(server: &MockServer, epics: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/epics"))
        .and(query_param("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(epics))
        .expect(1)
        .mount(server)
        .await;
}

/// Accept any DELETE whose path matches `pattern` with 204 No Content.
pub async fn mount_deletes(server: &MockServer, pattern: &str, expected_calls: u64) {
    Mock::given(method("DELETE"))
        .and(path_regex(pattern))
        .and(query_param("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Answer requests to exactly `route` with `response`, ahead of broader mocks.
pub async fn mount_override(
    server: &MockServer,
    http_method: &str,
    route: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(response)
        .with_priority(1)
        .mount(server)
        .await;
}

/// Paths of every received request with `http_method`, in arrival order.
pub async fn request_paths(server: &MockServer, http_method: &str) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == http_method)
        .map(|r| r.url.path().to_string())
        .collect()
}
