use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::JwtError;
use auth::TokenClaims;
use auth::TokenClass;

use crate::domain::authentication::models::AuthenticatedSession;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::SessionTokens;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::errors::AppError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProjection;
use crate::domain::user::ports::UserRepository;

/// Message returned for both an unknown email and a wrong password.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "email or password does not match";

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort over a user repository.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Authenticator,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User lookup implementation
    /// * `authenticator` - Password verification and token issuance
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(repository: Arc<UR>, authenticator: Authenticator) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn verify(&self, token: &str, class: TokenClass) -> Result<TokenClaims, AppError> {
        self.authenticator.verify(token, class).map_err(|e| {
            if e.is_configuration() {
                tracing::error!(error = %e, class = %class, "Token verification misconfigured");
            } else {
                tracing::debug!(reason = %e, class = %class, "Token rejected");
            }
            AppError::new(e, ErrorKind::NotAuthenticated)
        })
    }

    fn subject(claims: &TokenClaims) -> Result<UserId, AppError> {
        UserId::try_from(claims.id).map_err(|e| {
            tracing::debug!(reason = %e, "Token subject is not a user id");
            AppError::from_kind(ErrorKind::NotAuthenticated)
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::new(INVALID_CREDENTIALS_MESSAGE, ErrorKind::NotAuthorized)
}

fn issuance_error(error: JwtError) -> AppError {
    if error.is_configuration() {
        tracing::error!(error = %error, "Token issuance misconfigured");
        AppError::new(error, ErrorKind::TokenGeneratorError)
    } else {
        tracing::error!(error = %error, "Token signing failed");
        AppError::new(error, ErrorKind::UnknownError)
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AppError> {
        let Some(user) = self.repository.find_by_email(command.email()).await? else {
            tracing::info!("Login rejected: unknown email");
            return Err(invalid_credentials());
        };

        let pair = self
            .authenticator
            .authenticate(command.password(), &user.password_hash, user.id.into())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::info!(user_id = %user.id, "Login rejected: password mismatch");
                    invalid_credentials()
                }
                AuthenticationError::JwtError(e) => issuance_error(e),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedSession {
            user: UserProjection::from(&user),
            security: SessionTokens {
                access_token: pair.access.token,
                refresh_token: pair.refresh.token,
                access_expires_at: pair.access.expires_at,
                refresh_expires_at: pair.refresh.expires_at,
            },
        })
    }

    async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<AuthenticatedSession, AppError> {
        let claims = self.verify(refresh_token, TokenClass::Refresh)?;
        let user_id = Self::subject(&claims)?;

        // The refresh token is echoed back, so its expiration comes from its own claims
        let refresh_expires_at = claims
            .expires_at()
            .ok_or_else(|| AppError::from_kind(ErrorKind::NotAuthenticated))?;

        let Some(user) = self.repository.find_by_id(&user_id).await? else {
            tracing::info!(user_id = %user_id, "Refresh rejected: user no longer exists");
            return Err(AppError::from_kind(ErrorKind::NotAuthenticated));
        };

        let access = self
            .authenticator
            .issue(user.id.into(), TokenClass::Access)
            .map_err(issuance_error)?;

        tracing::info!(user_id = %user.id, "Access token refreshed");

        Ok(AuthenticatedSession {
            user: UserProjection::from(&user),
            security: SessionTokens {
                access_token: access.token,
                refresh_token: refresh_token.to_string(),
                access_expires_at: access.expires_at,
                refresh_expires_at,
            },
        })
    }

    async fn authenticate_access_token(&self, access_token: &str) -> Result<UserId, AppError> {
        let claims = self.verify(access_token, TokenClass::Access)?;
        Self::subject(&claims)
    }

    async fn current_user(&self, id: &UserId) -> Result<UserProjection, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|user| UserProjection::from(&user))
            .ok_or_else(|| AppError::from_kind(ErrorKind::NotFound))
    }
}
