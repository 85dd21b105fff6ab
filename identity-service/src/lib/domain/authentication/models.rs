use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::AppError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::models::UserProjection;

/// Credentials presented at login. Request-scoped, never stored.
#[derive(Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl LoginCommand {
    /// Construct a login command from raw input.
    ///
    /// # Errors
    /// * `ValidationError` - Email is malformed or password is empty
    pub fn new(email: String, password: String) -> Result<Self, AppError> {
        email_address::EmailAddress::from_str(&email).map_err(|e| {
            AppError::new(format!("invalid email: {}", e), ErrorKind::ValidationError)
        })?;

        if password.is_empty() {
            return Err(AppError::new(
                "password is required",
                ErrorKind::ValidationError,
            ));
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keeps the password out of logs
impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Tokens handed back to the caller with their expirations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Result of a login or refresh: who the caller is and which tokens they hold.
///
/// Built fresh for every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub user: UserProjection,
    pub security: SessionTokens,
}
