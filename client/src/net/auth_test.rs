use std::sync::Arc;

use super::*;
use crate::net::testing::{ScriptedTransport, client_answering};
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;

const LOGIN_OK: &str = r#"{
    "access_token": "a1",
    "refresh_token": "r1",
    "user": {"_id": "u1", "name": "Ana", "email": "ana@example.com", "role": "proveedor"},
    "provider": {"_id": "p1", "name": "Rutas Ana", "verificationStatus": "pendiente"}
}"#;

fn anonymous(responses: Vec<(u16, &str)>) -> (ApiClient, SessionStore, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new(responses));
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    let client = ApiClient::new("http://api.test", transport.clone(), session.clone());
    (client, session, transport)
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_posts_credentials_and_begins_session() {
    let (client, session, transport) = anonymous(vec![(201, LOGIN_OK)]);

    let response = login(&client, "ana@example.com", "secret").await.unwrap();
    assert_eq!(response.access_token, "a1");

    let sent = transport.last();
    assert_eq!(sent.url, "http://api.test/auth/login");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(sent.body.as_deref().unwrap()).unwrap(),
        serde_json::json!({"email": "ana@example.com", "password": "secret"})
    );
    assert_eq!(session.access_token().as_deref(), Some("a1"));
    assert_eq!(session.refresh_token().as_deref(), Some("r1"));
    assert_eq!(session.provider().unwrap().id, "p1");
}

#[tokio::test]
async fn login_failure_leaves_session_empty() {
    let (client, session, _) = anonymous(vec![(400, r#"{"message":"Invalid credentials"}"#)]);

    let err = login(&client, "ana@example.com", "wrong").await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: "Invalid credentials".to_owned() });
    assert!(session.access_token().is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn login_without_token_is_rejected() {
    let (client, session, _) = anonymous(vec![(200, r#"{"access_token":"","refresh_token":""}"#)]);

    let err = login(&client, "ana@example.com", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(session.snapshot().user.is_none());
}

// =============================================================
// register / logout
// =============================================================

#[tokio::test]
async fn register_sends_role_tag() {
    let (client, transport) = client_answering(201, r#"{"message":"User registered"}"#);
    let request = RegisterRequest {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::default(),
    };

    let response = register(&client, &request).await.unwrap();
    assert_eq!(response.message, "User registered");
    assert!(transport.last().body.unwrap().contains(r#""role":"proveedor""#));
}

#[tokio::test]
async fn logout_clears_session() {
    let (client, session, _) = anonymous(vec![(200, LOGIN_OK)]);
    login(&client, "ana@example.com", "secret").await.unwrap();

    logout(&session);
    assert!(session.access_token().is_none());
    assert!(session.user().is_none());
    assert!(session.provider().is_none());
}
