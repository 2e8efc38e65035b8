use thiserror::Error;

/// Error for full name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FullNameError {
    #[error("full name must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("full name must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for email validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email format is not valid")]
    InvalidFormat,
}

/// Error for phone number validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("phone number format is not valid")]
    InvalidFormat,
}

/// Top-level error for all identity operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    // Registration input shape errors (client-correctable, automatically
    // converted via #[from])
    #[error("invalid full name: {0}")]
    InvalidFullName(#[from] FullNameError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("invalid phone number: {0}")]
    InvalidPhoneNumber(#[from] PhoneNumberError),

    // Unique-constraint conflicts, tagged with the conflicting field
    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("phone number already registered")]
    PhoneNumberAlreadyRegistered,

    /// Covers unknown email, missing credential and wrong password alike.
    /// The collapse is deliberate: a distinguishable response would let a
    /// caller enumerate registered accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user not found")]
    NotFound,

    // Infrastructure errors
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("token issuance failed: {0}")]
    Token(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::PasswordHash(err.to_string())
    }
}

impl From<auth::JwtError> for UserError {
    fn from(err: auth::JwtError) -> Self {
        UserError::Token(err.to_string())
    }
}
