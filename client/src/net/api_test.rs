use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::testing::{ScriptedTransport, signed_in_client};
use crate::net::types::Tour;
use crate::util::storage::MemoryStorage;

// =============================================================
// Bearer decoration
// =============================================================

#[tokio::test]
async fn attaches_bearer_from_session() {
    let transport = Arc::new(ScriptedTransport::new(vec![(200, "[]")]));
    let (client, _) = signed_in_client(transport.clone());

    let tours: Vec<Tour> = client.get("/tours", Vec::new()).await.unwrap();
    assert!(tours.is_empty());

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "http://api.test/tours");
    assert_eq!(sent[0].bearer.as_deref(), Some("old-access"));
}

#[tokio::test]
async fn anonymous_request_has_no_bearer() {
    let transport = Arc::new(ScriptedTransport::new(vec![(201, r#"{"message":"ok"}"#)]));
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    let client = ApiClient::new("http://api.test", transport.clone(), session);

    let _: serde_json::Value = client.post("/auth/register", &serde_json::json!({})).await.unwrap();
    assert_eq!(transport.requests()[0].bearer, None);
}

// =============================================================
// Refresh and replay
// =============================================================

#[tokio::test]
async fn unauthorized_then_refresh_replays_once_and_returns_result() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        (401, r#"{"message":"expired"}"#),
        (200, r#"{"access_token":"new-access"}"#),
        (200, r#"[{"id":"t-1","title":"Walk"}]"#),
    ]));
    let (client, session) = signed_in_client(transport.clone());

    let tours: Vec<Tour> = client.get("/tours", Vec::new()).await.unwrap();
    assert_eq!(tours[0].id, "t-1");

    let sent = transport.requests();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1].url, "http://api.test/auth/refresh");
    assert_eq!(sent[1].bearer, None);
    assert!(sent[1].body.as_deref().unwrap().contains("refresh-1"));
    assert_eq!(sent[2].url, sent[0].url);
    assert_eq!(sent[2].bearer.as_deref(), Some("new-access"));
    assert_eq!(session.access_token().as_deref(), Some("new-access"));
    assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn refresh_rotates_refresh_token_when_returned() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        (401, ""),
        (200, r#"{"access_token":"a2","refresh_token":"r2"}"#),
        (204, ""),
    ]));
    let (client, session) = signed_in_client(transport);

    client.delete("/tours/t-1").await.unwrap();
    assert_eq!(session.refresh_token().as_deref(), Some("r2"));
}

#[tokio::test]
async fn second_unauthorized_after_refresh_is_not_retried_again() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        (401, ""),
        (200, r#"{"access_token":"new-access"}"#),
        (401, ""),
    ]));
    let (client, _) = signed_in_client(transport.clone());

    let err = client.get::<Vec<Tour>>("/tours", Vec::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn rejected_refresh_clears_tokens_and_redirects() {
    let transport = Arc::new(ScriptedTransport::new(vec![(401, ""), (403, r#"{"message":"invalid refresh"}"#)]));
    let (client, session) = signed_in_client(transport.clone());
    let redirects = Arc::new(AtomicUsize::new(0));
    let counter = redirects.clone();
    let client = client.on_session_expired(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = client.get::<Vec<Tour>>("/tours", Vec::new()).await.unwrap_err();
    assert_eq!(err, ApiError::SessionExpired);
    assert!(session.access_token().is_none());
    assert!(session.refresh_token().is_none());
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn refresh_server_error_keeps_tokens() {
    let transport = Arc::new(ScriptedTransport::new(vec![(401, ""), (500, "")]));
    let (client, session) = signed_in_client(transport);

    let err = client.get::<Vec<Tour>>("/tours", Vec::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(session.access_token().as_deref(), Some("old-access"));
}

#[tokio::test]
async fn missing_refresh_token_skips_refresh() {
    let transport = Arc::new(ScriptedTransport::new(vec![(401, "")]));
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    let client = ApiClient::new("http://api.test", transport.clone(), session);

    let err = client.get::<Vec<Tour>>("/tours", Vec::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(transport.requests().len(), 1);
}

// =============================================================
// Error mapping
// =============================================================

#[tokio::test]
async fn non_success_maps_to_status_error_with_message() {
    let transport = Arc::new(ScriptedTransport::new(vec![(404, r#"{"message":"Tour not found"}"#)]));
    let (client, _) = signed_in_client(transport);

    let err = client.get::<Tour>("/tours/x", Vec::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, message: "Tour not found".to_owned() });
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    let transport = Arc::new(ScriptedTransport::new(Vec::new()));
    let (client, _) = signed_in_client(transport);

    let err = client.get::<Tour>("/tours/x", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let transport = Arc::new(ScriptedTransport::new(vec![(200, "<html>")]));
    let (client, _) = signed_in_client(transport);

    let err = client.get::<Tour>("/tours/x", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn error_message_reads_message_list_and_error_field() {
    assert_eq!(error_message(400, r#"{"message":["title should not be empty"]}"#), "title should not be empty");
    assert_eq!(error_message(409, r#"{"error":"Conflict"}"#), "Conflict");
    assert_eq!(error_message(502, "bad gateway"), "status 502");
}

#[test]
fn api_error_status_for_auth_variants() {
    assert_eq!(ApiError::SessionExpired.status(), Some(401));
    assert_eq!(ApiError::not_found("x").status(), Some(404));
    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
}
