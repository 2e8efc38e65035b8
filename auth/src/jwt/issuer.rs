use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::errors::VerificationError;

/// Lifetime of an issued token, in minutes.
///
/// The token is stateless and there is no revocation list, so this window is
/// the only invalidation mechanism.
pub const TOKEN_TTL_MINUTES: i64 = 15;

/// Issues and verifies signed identity tokens.
///
/// The algorithm is pinned to HS256; a token signed with anything else fails
/// verification. The secret and issuer identity come from configuration.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a token issuer with the default 15-minute token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret (at least 256 bits for HS256; store
    ///   it in configuration or a vault, never in code)
    /// * `issuer` - Service identity written into and required from the `iss`
    ///   claim
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        Self::with_ttl(secret, issuer, Duration::minutes(TOKEN_TTL_MINUTES))
    }

    /// Create a token issuer with an explicit token lifetime.
    pub fn with_ttl(secret: &[u8], issuer: impl Into<String>, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            ttl,
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// Claims are stamped with the current time, so repeated calls for the
    /// same subject produce different tokens.
    ///
    /// # Arguments
    /// * `subject` - User identifier carried in the `sub` claim
    ///
    /// # Returns
    /// Compact serialized JWT
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: impl ToString) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, &self.issuer, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Checks, in order: compact form and signature, then issuer equality,
    /// then that the current time lies within `[nbf, exp)` with no leeway.
    /// All failures come back as the same [`VerificationError`] so callers
    /// cannot tell the paths apart.
    ///
    /// # Arguments
    /// * `token` - Compact serialized JWT
    ///
    /// # Returns
    /// Verified claims
    pub fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_nbf = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| VerificationError(e.to_string()))
    }
}
