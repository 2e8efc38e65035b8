//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the identity services:
//! - Password hashing (Argon2id)
//! - Identity token issuance and verification (HS256 JWT)
//! - Authentication coordination
//!
//! The backend uses the full flow (hash on registration, verify-and-issue on
//! login); the gateway only constructs a [`TokenIssuer`] to verify inbound
//! tokens. The signing secret and issuer identity are always injected by the
//! caller so they can be rotated through configuration.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", "identity-service");
//! let token = issuer.issue(42).unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", "identity-service");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, 42).unwrap();
//!
//! // Validate token
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::VerificationError;
pub use jwt::TOKEN_TTL_MINUTES;
pub use password::PasswordError;
pub use password::PasswordHasher;
