use thiserror::Error;

use crate::domain::errors::AppError;
use crate::domain::errors::ErrorKind;

/// Error for UserId construction failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("User id must be positive, got {0}")]
    NotPositive(i64),

    #[error("User id out of range: {0}")]
    OutOfRange(u64),
}

impl From<UserIdError> for AppError {
    fn from(err: UserIdError) -> Self {
        AppError::new(err, ErrorKind::ValidationError)
    }
}
