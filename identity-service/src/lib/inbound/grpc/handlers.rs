use tonic::Status;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;

pub mod find_me;
pub mod login_user;
pub mod register_user;

impl From<User> for crate::proto::UserResponse {
    fn from(user: User) -> Self {
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

impl From<UserProfile> for crate::proto::FindMeResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            full_name: profile.full_name,
            username: profile.username,
            email: profile.email,
            phone_number: profile.phone_number,
            is_active: profile.is_active,
            created_at: profile.created_at.to_rfc3339(),
        }
    }
}

/// Wire-status mapping for the domain error taxonomy.
///
/// Client-correctable failures keep their messages; infrastructure failures
/// keep their detail in the server logs and reach the wire as a generic
/// internal error, so raw store diagnostics never leak.
impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::InvalidFullName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPhoneNumber(_) => Status::invalid_argument(err.to_string()),
            UserError::EmailAlreadyRegistered | UserError::PhoneNumberAlreadyRegistered => {
                Status::already_exists(err.to_string())
            }
            UserError::InvalidCredentials => Status::unauthenticated(err.to_string()),
            UserError::NotFound => Status::not_found(err.to_string()),
            UserError::PasswordHash(_) | UserError::Token(_) | UserError::Database(_) => {
                tracing::error!(error = %err, "internal failure");
                Status::internal("internal error")
            }
        }
    }
}
