use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::proto::FindMeRequest;
use crate::proto::FindMeResponse;

pub async fn find_me(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let response = state
        .users
        .find_me(FindMeRequest {
            user_id: authenticated.user_id,
        })
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, response.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
    pub created_at: String,
}

impl From<FindMeResponse> for ProfileData {
    fn from(profile: FindMeResponse) -> Self {
        Self {
            full_name: profile.full_name,
            username: profile.username,
            email: profile.email,
            phone_number: profile.phone_number,
            is_active: profile.is_active,
            created_at: profile.created_at,
        }
    }
}
