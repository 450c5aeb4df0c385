//! Integration tests for the auth client against an in-process backend

use auth::{AuthClient, LoginRequest, OAuthProvider, RegisterRequest, Registration, SessionManager};
use axum::{Json, Router, http::StatusCode, routing::post};
use common::{Backend, MemoryStore, RequestError};
use serde_json::{Value, json};
use std::sync::Arc;

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "ana@example.com" && body["password"] == "secret1" {
        (StatusCode::OK, Json(json!({"ok": true, "token": "tok-ana"})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"ok": false, "error": "Invalid credentials"})),
        )
    }
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"ok": false, "error": "Email already registered"})),
        );
    }
    if body["username"] == "quiet" {
        return (StatusCode::CREATED, Json(json!({"ok": true})));
    }
    (StatusCode::CREATED, Json(json!({"ok": true, "token": "tok-new"})))
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client() -> AuthClient {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register));
    let base = spawn(app).await;
    AuthClient::new(Backend::new(base), SessionManager::new(Arc::new(MemoryStore::new())))
}

#[tokio::test]
async fn test_login_persists_token() {
    let client = client().await;

    client
        .login(&LoginRequest::new("ana@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(client.session().token().await.unwrap(), Some("tok-ana".to_string()));
}

#[tokio::test]
async fn test_invalid_login_keeps_session_empty() {
    let client = client().await;

    let err = client
        .login(&LoginRequest::new("ana@example.com", "wrong"))
        .await
        .unwrap_err();

    match &err {
        RequestError::Rejected { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(!client.session().is_signed_in().await.unwrap());
}

#[tokio::test]
async fn test_register_with_and_without_token() {
    let client = client().await;

    let outcome = client
        .register(&RegisterRequest::new("quiet", "quiet@example.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(outcome, Registration::AccountCreated);
    assert!(!client.session().is_signed_in().await.unwrap());

    let outcome = client
        .register(&RegisterRequest::new("bo", "bo@example.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(outcome, Registration::SignedIn);
    assert_eq!(client.session().token().await.unwrap(), Some("tok-new".to_string()));
}

#[tokio::test]
async fn test_register_rejection_carries_server_message() {
    let client = client().await;

    let err = client
        .register(&RegisterRequest::new("ana", "taken@example.com", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(err.message_or("Registration failed"), "Email already registered");
}

#[tokio::test]
async fn test_non_json_body_is_decode_failure() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
    );
    let base = spawn(app).await;
    let client = AuthClient::new(Backend::new(base), SessionManager::new(Arc::new(MemoryStore::new())));

    let err = client
        .login(&LoginRequest::new("ana@example.com", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Decode(_)), "got {err:?}");
    assert!(err.is_connection_failure());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AuthClient::new(
        Backend::new(format!("http://{addr}")),
        SessionManager::new(Arc::new(MemoryStore::new())),
    );

    let err = client
        .login(&LoginRequest::new("ana@example.com", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_social_login_round_trip() {
    let client = client().await;
    assert!(client.social_login_url(OAuthProvider::Google).ends_with("/api/auth/google"));

    let prefix = "medialoggermobile://success";
    assert!(!client.complete_social_login("medialoggermobile://success", prefix).await.unwrap());
    assert!(!client.session().is_signed_in().await.unwrap());

    assert!(
        client
            .complete_social_login("medialoggermobile://success?token=tok-g", prefix)
            .await
            .unwrap()
    );
    assert_eq!(client.session().token().await.unwrap(), Some("tok-g".to_string()));

    client.logout().await.unwrap();
    assert!(!client.session().is_signed_in().await.unwrap());
}
