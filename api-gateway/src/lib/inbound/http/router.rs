use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::find_me::find_me;
use super::handlers::login_user::login_user;
use super::handlers::register_user::register_user;
use super::middleware::authenticate as auth_middleware;
use crate::outbound::grpc::GrpcUserServiceClient;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<GrpcUserServiceClient>,
}

pub fn create_router(
    users: Arc<GrpcUserServiceClient>,
    token_verifier: Arc<TokenIssuer>,
    allowed_origin: HeaderValue,
) -> Router {
    let state = AppState { users };

    let public_routes = Router::new()
        .route("/api/users", post(register_user))
        .route("/api/users/login", post(login_user));

    // The guard runs entirely at the gateway: it needs the token verifier and
    // nothing from the backend.
    let protected_routes = Router::new()
        .route("/api/users/me", get(find_me))
        .route_layer(middleware::from_fn_with_state(
            token_verifier,
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let cors_layer = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer)
        .with_state(state)
}
