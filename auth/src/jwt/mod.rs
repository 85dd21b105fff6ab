pub mod claims;
pub mod config;
pub mod errors;
pub mod issuer;
pub mod verifier;

pub use claims::IssuedToken;
pub use claims::TokenClaims;
pub use claims::TokenClass;
pub use claims::TokenPair;
pub use config::TokenConfig;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
