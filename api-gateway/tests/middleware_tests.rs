use std::sync::Arc;

use api_gateway::inbound::http::middleware::authenticate;
use api_gateway::inbound::http::middleware::AuthenticatedUser;
use api_gateway::inbound::http::middleware::ACCESS_TOKEN_COOKIE;
use auth::TokenIssuer;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::Extension;
use axum::Router;
use tower::ServiceExt;

const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
const ISSUER: &str = "identity-service";

async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
    user.user_id.to_string()
}

fn app(verifier: Arc<TokenIssuer>) -> Router {
    Router::new()
        .route("/protected", get(whoami))
        .route_layer(middleware::from_fn_with_state(verifier, authenticate))
}

fn request() -> axum::http::request::Builder {
    Request::builder().uri("/protected")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = app(Arc::new(TokenIssuer::new(SECRET, ISSUER)));

    let response = app
        .oneshot(request().body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = app(Arc::new(TokenIssuer::new(SECRET, ISSUER)));

    let response = app
        .oneshot(
            request()
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let verifier = Arc::new(TokenIssuer::new(SECRET, ISSUER));
    let expired_signer = TokenIssuer::with_ttl(SECRET, ISSUER, chrono::Duration::minutes(-5));
    let token = expired_signer.issue(42).unwrap();

    let response = app(verifier)
        .oneshot(
            request()
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_header_token_resolves_identity() {
    let verifier = Arc::new(TokenIssuer::new(SECRET, ISSUER));
    let token = verifier.issue(42).unwrap();

    let response = app(verifier)
        .oneshot(
            request()
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "42");
}

#[tokio::test]
async fn test_cookie_token_is_a_fallback() {
    let verifier = Arc::new(TokenIssuer::new(SECRET, ISSUER));
    let token = verifier.issue(42).unwrap();

    let response = app(verifier)
        .oneshot(
            request()
                .header(header::COOKIE, format!("{}={}", ACCESS_TOKEN_COOKIE, token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "42");
}

#[tokio::test]
async fn test_header_takes_precedence_over_cookie() {
    let verifier = Arc::new(TokenIssuer::new(SECRET, ISSUER));
    let header_token = verifier.issue(1).unwrap();
    let cookie_token = verifier.issue(2).unwrap();

    let response = app(verifier)
        .oneshot(
            request()
                .header(header::AUTHORIZATION, format!("Bearer {}", header_token))
                .header(
                    header::COOKIE,
                    format!("{}={}", ACCESS_TOKEN_COOKIE, cookie_token),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "1");
}

#[tokio::test]
async fn test_non_numeric_subject_is_a_client_error() {
    let verifier = Arc::new(TokenIssuer::new(SECRET, ISSUER));
    let token = verifier.issue("not-a-number").unwrap();

    let response = app(verifier)
        .oneshot(
            request()
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
