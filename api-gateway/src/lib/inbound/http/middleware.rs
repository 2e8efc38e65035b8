use std::sync::Arc;

use auth::TokenIssuer;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use cookie::Cookie;
use serde_json::json;

/// Name of the cookie carrying the identity token between browser and
/// gateway.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Extension type storing the authenticated caller in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

/// Middleware that resolves an identity from the bearer token and attaches it
/// to the request before it reaches a protected handler.
///
/// The `Authorization: Bearer` header wins over the `access_token` cookie.
/// With neither present the request is rejected without running the verifier.
/// Verification failures all surface as the same unauthorized response; which
/// check rejected the token is not distinguishable from outside.
pub async fn authenticate(
    State(verifier): State<Arc<TokenIssuer>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(&req)
        .or_else(|| cookie_token(&req))
        .ok_or_else(|| unauthorized("no token provided"))?;

    let claims = verifier.verify(&token).map_err(|e| {
        tracing::warn!(error = %e, "token verification failed");
        unauthorized(&e.to_string())
    })?;

    // The subject is a stringified integer id. Anything else means a
    // malformed token slipped past issuance; reject it as a client error
    // rather than letting downstream code choke on it.
    let user_id: i32 = claims.sub.parse().map_err(|_| {
        tracing::error!("token subject is not a numeric user id");
        bad_request("invalid user id")
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<String> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

fn cookie_token(req: &Request) -> Option<String> {
    let header = req.headers().get(http::header::COOKIE)?.to_str().ok()?;

    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

fn unauthorized(reason: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": format!("unauthorized: {}", reason) })),
    )
        .into_response()
}

fn bad_request(reason: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": reason })),
    )
        .into_response()
}
