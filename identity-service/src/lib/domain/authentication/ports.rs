use async_trait::async_trait;

use crate::domain::authentication::models::AuthenticatedSession;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::errors::AppError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProjection;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access and a refresh token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Session with the user projection and both tokens
    ///
    /// # Errors
    /// * `NotAuthorized` - Unknown email or wrong password (same message for both)
    /// * `RepositoryError` - User lookup failed
    /// * `TokenGeneratorError` - Token configuration unusable
    /// * `UnknownError` - Token signing failed
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AppError>;

    /// Mint a new access token from a refresh token.
    ///
    /// The refresh token itself is returned unchanged, with its original expiration.
    ///
    /// # Arguments
    /// * `refresh_token` - Refresh token issued at login
    ///
    /// # Returns
    /// Session with the user projection, a new access token and the given refresh token
    ///
    /// # Errors
    /// * `NotAuthenticated` - Token invalid, expired, of the wrong class, or its user is gone
    /// * `RepositoryError` - User lookup failed
    /// * `TokenGeneratorError` - Token configuration unusable
    async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<AuthenticatedSession, AppError>;

    /// Resolve the user an access token was issued for.
    ///
    /// # Errors
    /// * `NotAuthenticated` - Token invalid, expired or of the wrong class
    async fn authenticate_access_token(&self, access_token: &str) -> Result<UserId, AppError>;

    /// Public view of an authenticated user.
    ///
    /// # Errors
    /// * `NotFound` - User no longer exists
    /// * `RepositoryError` - User lookup failed
    async fn current_user(&self, id: &UserId) -> Result<UserProjection, AppError>;
}
