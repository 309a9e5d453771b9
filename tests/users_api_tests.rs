//! End-to-end tests for the `User` resource against a mock Ning server.
//!
//! These tests verify the requests that reach the wire, response decoding,
//! paging, and the mapping of server and transport failures to errors.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use ning_api::item::{Fields, Key, User, UserField};
use ning_api::{
    AccessError, AccessToken, HostUrl, HttpError, NetworkName, NingClient, NingConfig,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "/xn/rest/example/1.0";

/// Creates a client talking to the given mock server.
fn create_test_client(server: &MockServer) -> NingClient {
    create_test_client_with_timeout(server, Duration::from_secs(5))
}

fn create_test_client_with_timeout(server: &MockServer, timeout: Duration) -> NingClient {
    let config = NingConfig::builder()
        .network(NetworkName::new("example").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .read_timeout(timeout)
        .page_size(2)
        .build()
        .unwrap();
    NingClient::new(config).unwrap()
}

fn user_entry(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "author": name.to_lowercase(),
        "fullName": name,
        "createdDate": "2010-03-04T05:06:07.000Z"
    })
}

fn query_of(request: &wiremock::Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

// ============================================================================
// Counter
// ============================================================================

#[tokio::test]
async fn test_count_pending_members() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/count")))
        .and(query_param("createdAfter", "2010-01-01T00:00:00.000Z"))
        .and(query_param("isApproved", "false"))
        .and(query_param("isMember", "true"))
        .and(header("Authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let count = client
        .users()
        .counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
        .unapproved()
        .only_members()
        .count()
        .await;

    assert_eq!(assert_ok!(count), 3);

    let requests = server.received_requests().await.unwrap();
    let query = query_of(&requests[0]);
    assert!(!query.iter().any(|(k, _)| k == "author"));
}

#[tokio::test]
async fn test_count_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/count")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "reason": "Internal error"
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .users()
        .counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
        .count()
        .await;

    match assert_err!(result) {
        AccessError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.message, "Internal error");
        }
        other => panic!("Expected response error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_request_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/count")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "reason": "Not allowed"
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .users()
        .counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
        .count()
        .await;

    assert!(matches!(
        result,
        Err(AccessError::Api { resource: "User", ref reason }) if reason == "Not allowed"
    ));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/count")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .users()
        .counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
        .count()
        .await;

    assert!(matches!(
        result,
        Err(AccessError::MalformedResponse { resource: "User", .. })
    ));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/count")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "count": 1}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = create_test_client_with_timeout(&server, Duration::from_millis(100));
    let result = client
        .users()
        .counter(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap())
        .count()
        .await;

    match result {
        Err(AccessError::Http(HttpError::Timeout {
            endpoint,
            timeout_ms,
        })) => {
            assert_eq!(endpoint, "User/count");
            assert_eq!(timeout_ms, 100);
        }
        other => panic!("Expected timeout, got: {other:?}"),
    }
}

// ============================================================================
// Finder
// ============================================================================

#[tokio::test]
async fn test_find_by_current_author_decodes_entry_and_resources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User")))
        .and(query_param("fields", "fullName,author"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": user_entry("3011345:User:12", "Alice"),
            "resources": {
                "alice": {"fullName": "Alice", "iconUrl": "http://example.com/a.png"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let user = client
        .users()
        .finder(Fields::new(UserField::FullName, &[UserField::Author]))
        .find_by_current_author()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.full_name.as_deref(), Some("Alice"));
    assert_eq!(user.id.as_ref().unwrap().to_string(), "3011345:User:12");
    assert_eq!(
        user.author_resource().and_then(|r| r["iconUrl"].as_str()),
        Some("http://example.com/a.png")
    );
}

#[tokio::test]
async fn test_find_returns_none_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User")))
        .and(query_param("id", "3011345:User:99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "reason": "Not found"
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let key: Key<User> = Key::new("3011345:User:99").unwrap();
    let result = client.users().finder(Fields::all()).find(&key).await;

    assert!(assert_ok!(result).is_none());
}

#[tokio::test]
async fn test_find_by_author_returns_none_without_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User")))
        .and(query_param("author", "nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": []
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .users()
        .finder(Fields::all())
        .find_by_author("nobody")
        .await;

    assert!(assert_ok!(result).is_none());
}

#[tokio::test]
async fn test_find_by_author_takes_first_of_several() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User")))
        .and(query_param("author", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [user_entry("1:User:1", "Alice"), user_entry("1:User:2", "Alice")]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let user = client
        .users()
        .finder(Fields::all())
        .find_by_author("alice")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id.unwrap().to_string(), "1:User:1");
}

#[tokio::test]
async fn test_find_by_authors_sends_every_author_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [user_entry("1:User:2", "Bob"), user_entry("1:User:1", "Alice")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let users = client
        .users()
        .finder(Fields::new(UserField::FullName, &[]))
        .find_by_authors(&["bob", "alice"])
        .await
        .unwrap();

    let names: Vec<_> = users.iter().filter_map(|u| u.full_name.as_deref()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);

    let requests = server.received_requests().await.unwrap();
    let authors: Vec<_> = query_of(&requests[0])
        .into_iter()
        .filter(|(k, _)| k == "author")
        .map(|(_, v)| v)
        .collect();
    assert_eq!(authors, vec!["bob", "alice"]);
}

#[tokio::test]
async fn test_find_by_authors_returns_empty_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "reason": "Not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .users()
        .finder(Fields::all())
        .find_by_authors(&["ghost"])
        .await;

    assert!(assert_ok!(result).is_empty());
}

// ============================================================================
// Paged listing
// ============================================================================

async fn mount_two_pages(server: &MockServer, expected_per_page: u64) {
    // The anchored mock is mounted first so it takes precedence.
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/alpha")))
        .and(query_param("anchor", "a1"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [user_entry("1:User:3", "Carol")],
            "lastPage": true
        })))
        .expect(expected_per_page)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/alpha")))
        .and(query_param("count", "2"))
        .and(query_param("isMember", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [user_entry("1:User:1", "Alice"), user_entry("1:User:2", "Bob")],
            "anchor": "a1",
            "firstPage": true,
            "lastPage": false
        })))
        .expect(expected_per_page)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cursor_walks_every_page_once() {
    let server = MockServer::start().await;
    mount_two_pages(&server, 1).await;

    let client = create_test_client(&server);
    let list = client
        .users()
        .lister_for_alpha(Fields::new(UserField::FullName, &[]))
        .only_members()
        .list();

    let mut cursor = list.cursor();
    let mut names = Vec::new();
    while let Some(user) = cursor.next_item().await.unwrap() {
        names.push(user.full_name.unwrap());
    }

    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(cursor.pages_fetched(), 2);
    assert!(cursor.is_exhausted());
    assert!(cursor.next_page().await.unwrap().is_none());
    assert_eq!(cursor.pages_fetched(), 2);
}

#[tokio::test]
async fn test_paged_list_is_restartable() {
    let server = MockServer::start().await;
    mount_two_pages(&server, 2).await;

    let client = create_test_client(&server);
    let list = client
        .users()
        .lister_for_alpha(Fields::all())
        .only_members()
        .list();

    let first = list.collect_all().await.unwrap();
    let second = list.collect_all().await.unwrap();

    let ids = |users: &[User]| -> Vec<String> {
        users
            .iter()
            .filter_map(|u| u.id.as_ref().map(ToString::to_string))
            .collect()
    };
    assert_eq!(ids(&first), vec!["1:User:1", "1:User:2", "1:User:3"]);
    assert_eq!(ids(&first), ids(&second));
}

#[tokio::test]
async fn test_every_page_request_carries_all_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/recent")))
        .and(query_param("anchor", "r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [user_entry("1:User:9", "Dave")],
            "lastPage": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/recent")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [user_entry("1:User:7", "Dave"), user_entry("1:User:8", "Dave")],
            "anchor": "r1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let users = client
        .users()
        .lister_for_recent(Fields::new(UserField::FullName, &[]))
        .author("dave")
        .unapproved()
        .only_members()
        .list()
        .collect_all()
        .await
        .unwrap();
    assert_eq!(users.len(), 3);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        let query = query_of(request);
        let value = |key: &str| {
            query
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(value("author"), vec!["dave"]);
        assert_eq!(value("isApproved"), vec!["false"]);
        assert_eq!(value("isMember"), vec!["true"]);
        assert_eq!(value("fields"), vec!["fullName"]);
        assert_eq!(value("count"), vec!["2"]);
    }
    assert!(!query_of(&requests[0]).iter().any(|(k, _)| k == "anchor"));
    assert!(query_of(&requests[1]).contains(&("anchor".to_string(), "r1".to_string())));
}

#[tokio::test]
async fn test_empty_listing_yields_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/User/recent")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": [],
            "anchor": "ignored"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut cursor = client.users().lister_for_recent(Fields::all()).list().cursor();

    assert!(cursor.next_page().await.unwrap().is_none());
    assert!(cursor.next_item().await.unwrap().is_none());
    assert!(cursor.is_exhausted());
}

// ============================================================================
// Updater
// ============================================================================

#[tokio::test]
async fn test_approve_member_sends_form_and_returns_updated_user() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{BASE}/User")))
        .and(header("Authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entry": {
                "id": "3011345:User:12",
                "fullName": "Alice",
                "approved": true,
                "statusMessage": "Welcome aboard"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let user = User::with_id(Key::new("3011345:User:12").unwrap());
    let base = client.users().updater_for(user);

    let updated = base
        .status_message("Welcome aboard")
        .approved(true)
        .update()
        .await
        .unwrap();

    assert_eq!(updated.approved, Some(true));
    assert_eq!(updated.status_message.as_deref(), Some("Welcome aboard"));
    assert!(base.item().approved.is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());

    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    let keys: Vec<_> = body
        .split('&')
        .filter_map(|pair| pair.split('=').next())
        .collect();
    assert_eq!(keys, vec!["id", "statusMessage", "approved"]);
    assert!(body.contains("approved=true"));
}

#[tokio::test]
async fn test_update_without_entry_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{BASE}/User")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.users().updater().approved(false).update().await;

    assert!(matches!(
        result,
        Err(AccessError::MalformedResponse { resource: "User", .. })
    ));
}
