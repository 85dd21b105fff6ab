use thiserror::Error;

/// Error type for password operations.
///
/// Verification never produces one of these: a mismatch or an unreadable
/// stored hash is reported as `false`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
