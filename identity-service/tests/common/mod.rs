use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use identity_service::domain::user::errors::UserError;
use identity_service::domain::user::models::Credentials;
use identity_service::domain::user::models::User;
use identity_service::domain::user::models::UserProfile;
use identity_service::domain::user::models::UserRegistration;
use identity_service::domain::user::ports::UserRepository;

/// In-memory stand-in for the Postgres repository. Test double only.
///
/// Mirrors the store contract: the uniqueness check and the insert happen
/// under one lock, the way the database constraint makes check-and-insert
/// atomic, so racing registrations resolve to one success and one duplicate.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<StoredUser>>,
}

struct StoredUser {
    user: User,
    password_hash: Option<String>,
    is_deleted: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `is_active` off for an account, as an account-suspension flow
    /// outside this core would.
    pub fn deactivate(&self, id: i32) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.user.id == id) {
            row.user.is_active = false;
        }
    }

    /// Mark an account soft-deleted.
    pub fn mark_deleted(&self, id: i32) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.user.id == id) {
            row.is_deleted = true;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(
        &self,
        registration: &UserRegistration,
        password_hash: Option<String>,
    ) -> Result<User, UserError> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|r| r.user.email == registration.email().as_str())
        {
            return Err(UserError::EmailAlreadyRegistered);
        }
        if rows
            .iter()
            .any(|r| r.user.phone_number == registration.phone_number().as_str())
        {
            return Err(UserError::PhoneNumberAlreadyRegistered);
        }

        let now = Utc::now();
        let user = User {
            id: rows.len() as i32 + 1,
            full_name: registration.full_name().as_str().to_string(),
            username: registration.email().local_part().to_string(),
            email: registration.email().as_str().to_string(),
            phone_number: registration.phone_number().as_str().to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        rows.push(StoredUser {
            user: user.clone(),
            password_hash,
            is_deleted: false,
        });

        Ok(user)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credentials>, UserError> {
        let rows = self.rows.lock().unwrap();

        Ok(rows
            .iter()
            .find(|r| r.user.email == email && r.user.is_active && !r.is_deleted)
            .map(|r| Credentials {
                user_id: r.user.id,
                password_hash: r.password_hash.clone(),
            }))
    }

    async fn find_profile_by_id(&self, id: i32) -> Result<Option<UserProfile>, UserError> {
        let rows = self.rows.lock().unwrap();

        Ok(rows
            .iter()
            .find(|r| r.user.id == id && !r.is_deleted)
            .map(|r| UserProfile {
                full_name: r.user.full_name.clone(),
                username: r.user.username.clone(),
                email: r.user.email.clone(),
                phone_number: r.user.phone_number.clone(),
                is_active: r.user.is_active,
                created_at: r.user.created_at,
            }))
    }
}
