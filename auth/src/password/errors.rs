use thiserror::Error;

/// Error type for password hashing.
///
/// Verification has no error surface: a digest that cannot be parsed simply
/// fails to match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
