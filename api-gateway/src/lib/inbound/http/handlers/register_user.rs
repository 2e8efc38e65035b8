use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::proto::RegisterRequest;
use crate::proto::UserResponse;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    // The gateway forwards the registration as-is; validation and hashing
    // belong to the backend.
    let response = state.users.register_user(body.into()).await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, response.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    full_name: String,
    email: String,
    password: Option<String>,
    phone_number: String,
}

impl From<RegisterUserBody> for RegisterRequest {
    fn from(body: RegisterUserBody) -> Self {
        Self {
            full_name: body.full_name,
            email: body.email,
            password: body.password,
            phone_number: body.phone_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i32,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
}

impl From<UserResponse> for UserData {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            is_active: user.is_active,
        }
    }
}
