use thiserror::Error;

use super::claims::TokenClass;

/// Error type for token issuance and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("No signing secret configured for {0} tokens")]
    MissingSecret(TokenClass),

    #[error("No time-to-live configured for {0} tokens")]
    MissingTtl(TokenClass),

    #[error("Time-to-live for {class} tokens must be positive, got {value}")]
    InvalidTtl { class: TokenClass, value: i64 },

    #[error("Access and refresh tokens must be signed with distinct secrets")]
    SharedSecret,

    #[error("Unknown token class: {0}")]
    UnknownTokenClass(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Unexpected signing algorithm: {0}")]
    UnexpectedAlgorithm(String),

    #[error("Expected {expected} token, got {found} token")]
    ClassMismatch {
        expected: TokenClass,
        found: TokenClass,
    },

    #[error("Token is expired")]
    TokenExpired,
}

impl JwtError {
    /// Whether the error comes from missing or malformed token configuration
    /// rather than from the token or the signing step.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            JwtError::MissingSecret(_)
                | JwtError::MissingTtl(_)
                | JwtError::InvalidTtl { .. }
                | JwtError::SharedSecret
                | JwtError::UnknownTokenClass(_)
        )
    }
}
