pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::Claims;
pub use errors::JwtError;
pub use errors::VerificationError;
pub use issuer::TokenIssuer;
pub use issuer::TOKEN_TTL_MINUTES;
