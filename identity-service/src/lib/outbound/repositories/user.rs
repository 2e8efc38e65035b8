use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserRegistration;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    full_name: String,
    username: String,
    email: String,
    phone_number: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            username: row.username,
            email: row.email,
            phone_number: row.phone_number,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    full_name: String,
    username: String,
    email: String,
    phone_number: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            full_name: row.full_name,
            username: row.username,
            email: row.email,
            phone_number: row.phone_number,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// Classify an insert failure: a unique violation is reported by the
/// constraint that fired so the caller can name the conflicting field;
/// everything else is a generic storage failure whose detail stays server-side.
fn classify_create_error(e: sqlx::Error) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some("users_email_key") | Some("idx_users_email") => {
                    return UserError::EmailAlreadyRegistered;
                }
                Some("users_phone_number_key") | Some("idx_users_phone_number") => {
                    return UserError::PhoneNumberAlreadyRegistered;
                }
                _ => {}
            }
        }
    }
    UserError::Database(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(
        &self,
        registration: &UserRegistration,
        password_hash: Option<String>,
    ) -> Result<User, UserError> {
        // No prior existence check: the unique indexes arbitrate racing
        // inserts atomically.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (full_name, username, email, password, phone_number, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, full_name, username, email, phone_number, is_active, created_at, updated_at
            "#,
        )
        .bind(registration.full_name().as_str())
        .bind(registration.email().local_part())
        .bind(registration.email().as_str())
        .bind(password_hash)
        .bind(registration.phone_number().as_str())
        .bind(true)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_create_error)?;

        Ok(row.into())
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credentials>, UserError> {
        let row = sqlx::query_as::<_, (i32, Option<String>)>(
            r#"
            SELECT id, password
            FROM users
            WHERE email = $1 AND is_active = true AND is_deleted = false
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(row.map(|(user_id, password_hash)| Credentials {
            user_id,
            password_hash,
        }))
    }

    async fn find_profile_by_id(&self, id: i32) -> Result<Option<UserProfile>, UserError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT full_name, username, email, phone_number, is_active, created_at
            FROM users
            WHERE id = $1 AND is_deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(row.map(UserProfile::from))
    }
}
