use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Single error surface for every token verification failure.
///
/// Parse failures, bad signatures, issuer mismatches and expired or
/// not-yet-valid tokens all collapse into this one type. This is deliberate:
/// callers surface nothing beyond "unauthorized", so a client cannot learn
/// which check rejected its token. The cause is human-readable and intended
/// for server-side logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Token invalid: {0}")]
pub struct VerificationError(pub String);
