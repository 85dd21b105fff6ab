use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenClaims;
use crate::jwt::TokenClass;
use crate::jwt::TokenConfig;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenPair;
use crate::jwt::TokenVerifier;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance/verification.
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `config` - Secrets and lifetimes for both token classes
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(config: TokenConfig) -> Self {
        Self::with_password_hasher(config, PasswordHasher::new())
    }

    pub fn with_password_hasher(config: TokenConfig, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            issuer: TokenIssuer::new(config.clone()),
            verifier: TokenVerifier::new(config),
        }
    }

    /// Verify a password and issue an access/refresh token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject_id` - Identifier of the principal the tokens are for
    ///
    /// # Returns
    /// Both tokens with their expirations
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Either issuance failed; no partial pair is returned
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject_id: u64,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access = self.issuer.issue(subject_id, TokenClass::Access)?;
        let refresh = self.issuer.issue(subject_id, TokenClass::Refresh)?;

        Ok(TokenPair { access, refresh })
    }

    /// Issue a single token without password verification.
    ///
    /// Used by the refresh flow once the refresh token has been verified.
    pub fn issue(&self, subject_id: u64, class: TokenClass) -> Result<IssuedToken, JwtError> {
        self.issuer.issue(subject_id, class)
    }

    /// Verify a token of the expected class and return its claims.
    pub fn verify(&self, token: &str, expected: TokenClass) -> Result<TokenClaims, JwtError> {
        self.verifier.verify(token, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::with_password_hasher(TokenConfig::for_tests(), PasswordHasher::with_cost(4))
    }

    fn stored_hash(password: &str) -> String {
        PasswordHasher::with_cost(4)
            .hash(password)
            .expect("Failed to hash password")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let hash = stored_hash("my_password");

        let pair = authenticator
            .authenticate("my_password", &hash, 123)
            .expect("Authentication failed");

        assert_eq!(pair.access.class, TokenClass::Access);
        assert_eq!(pair.refresh.class, TokenClass::Refresh);
        assert!(pair.refresh.expires_at > pair.access.expires_at);

        let access = authenticator
            .verify(&pair.access.token, TokenClass::Access)
            .expect("Access token validation failed");
        let refresh = authenticator
            .verify(&pair.refresh.token, TokenClass::Refresh)
            .expect("Refresh token validation failed");
        assert_eq!(access.id, 123);
        assert_eq!(refresh.id, 123);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();
        let hash = stored_hash("my_password");

        let result = authenticator.authenticate("wrong_password", &hash, 123);
        assert_eq!(result, Err(AuthenticationError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_aborts_when_refresh_issuance_fails() {
        let authenticator = Authenticator::with_password_hasher(
            TokenConfig {
                refresh_ttl_hours: None,
                ..TokenConfig::for_tests()
            },
            PasswordHasher::with_cost(4),
        );
        let hash = stored_hash("my_password");

        let result = authenticator.authenticate("my_password", &hash, 123);
        assert_eq!(
            result,
            Err(AuthenticationError::JwtError(JwtError::MissingTtl(
                TokenClass::Refresh
            )))
        );
    }

    #[test]
    fn test_issue_and_verify() {
        let authenticator = authenticator();

        let issued = authenticator
            .issue(7, TokenClass::Access)
            .expect("Failed to issue token");
        let claims = authenticator
            .verify(&issued.token, TokenClass::Access)
            .expect("Failed to verify token");

        assert_eq!(claims.id, 7);
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = authenticator().verify("invalid.token.here", TokenClass::Access);
        assert!(result.is_err());
    }
}
