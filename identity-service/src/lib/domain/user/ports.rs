use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Read access to stored users needed by authentication.
///
/// Absence is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address as entered by the caller
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError>;
}
