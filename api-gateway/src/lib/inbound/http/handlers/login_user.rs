use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cookie::time::Duration;
use cookie::Cookie;
use cookie::SameSite;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::router::AppState;
use crate::proto::LoginRequest;

pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginUserBody>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state
        .users
        .login_user(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    // Browser transport: a same-site cookie bounded to the token lifetime.
    // The token itself is the only payload the client gets back.
    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, response.token))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(auth::TOKEN_TTL_MINUTES))
        .build();

    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        ApiSuccess::new(StatusCode::CREATED, ()),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUserBody {
    email: String,
    password: String,
}
