use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserRegistration;

/// Persistence operations for user records.
///
/// The identity core depends only on this capability. The Postgres adapter is
/// the production implementation; an in-memory one exists strictly as a test
/// double.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new user, deriving the username from the email local-part.
    ///
    /// Uniqueness of email and phone number is enforced by the storage
    /// layer's own constraints at insert time. There is no prior existence
    /// check, so two racing registrations with the same email resolve to one
    /// success and one duplicate error.
    ///
    /// # Arguments
    /// * `registration` - Validated registration input
    /// * `password_hash` - Hashed credential, or `None` when no credential
    ///   was supplied
    ///
    /// # Returns
    /// The created user
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email collides with an existing record
    /// * `PhoneNumberAlreadyRegistered` - Phone number collides
    /// * `Database` - Any other storage failure
    async fn create(
        &self,
        registration: &UserRegistration,
        password_hash: Option<String>,
    ) -> Result<User, UserError>;

    /// Look up the stored credential for an account by email.
    ///
    /// Only active, non-deleted accounts are eligible.
    ///
    /// # Returns
    /// Optional credentials (`None` when no eligible account carries this
    /// email)
    ///
    /// # Errors
    /// * `Database` - Storage failure
    async fn find_credentials_by_email(&self, email: &str)
        -> Result<Option<Credentials>, UserError>;

    /// Look up the profile projection for an account.
    ///
    /// Excludes soft-deleted accounts and never reads the password column.
    ///
    /// # Returns
    /// Optional profile (`None` when the account does not exist)
    ///
    /// # Errors
    /// * `Database` - Storage failure
    async fn find_profile_by_id(&self, id: i32) -> Result<Option<UserProfile>, UserError>;
}
