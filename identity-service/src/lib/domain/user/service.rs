use std::sync::Arc;

use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserRegistration;
use crate::domain::user::ports::UserRepository;

/// Identity core service.
///
/// Orchestrates registration, login and profile fetch over an injected
/// repository and the authentication utilities. Holds no state of its own, so
/// any number of requests can run through it concurrently.
pub struct IdentityService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> IdentityService<R>
where
    R: UserRepository,
{
    /// Create a new identity service with injected dependencies.
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Register a new user.
    ///
    /// The registration arrives validated by construction. The password, when
    /// present, is hashed here; a hashing failure aborts the request so an
    /// unhashed credential can never reach the store. Store errors propagate
    /// unchanged.
    pub async fn register(&self, registration: UserRegistration) -> Result<User, UserError> {
        let password_hash = match registration.password() {
            Some(password) => Some(self.authenticator.hash_password(password)?),
            None => None,
        };

        self.repository.create(&registration, password_hash).await
    }

    /// Authenticate by email and password and issue an identity token.
    ///
    /// Unknown email, an account without a stored credential, and a wrong
    /// password all collapse into the same `InvalidCredentials` value. This
    /// narrowing is deliberate: a distinguishable response would let a caller
    /// enumerate registered emails.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, UserError> {
        let credentials = self
            .repository
            .find_credentials_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let password_hash = credentials
            .password_hash
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(password, &password_hash, credentials.user_id)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::Jwt(e) => UserError::Token(e.to_string()),
            })?;

        Ok(result.access_token)
    }

    /// Fetch the caller's own profile.
    pub async fn find_me(&self, id: i32) -> Result<UserProfile, UserError> {
        self.repository
            .find_profile_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }
}
