use std::fmt;

use chrono::Duration;

use super::claims::TokenClass;
use super::errors::JwtError;

/// Secrets and lifetimes for both token classes.
///
/// Every value is optional so that absent configuration is representable;
/// lookups fail instead of falling back to a default.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenConfig {
    pub access_secret: Option<String>,
    pub refresh_secret: Option<String>,
    pub access_ttl_minutes: Option<i64>,
    pub refresh_ttl_hours: Option<i64>,
}

impl TokenConfig {
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_ttl_minutes: i64,
        refresh_ttl_hours: i64,
    ) -> Self {
        Self {
            access_secret: Some(access_secret.into()),
            refresh_secret: Some(refresh_secret.into()),
            access_ttl_minutes: Some(access_ttl_minutes),
            refresh_ttl_hours: Some(refresh_ttl_hours),
        }
    }

    /// Fixed configuration for tests. Never use outside of tests.
    pub fn for_tests() -> Self {
        Self::new("test_access_secret", "test_refresh_secret", 60, 24)
    }

    /// Signing secret for a token class.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is absent or empty
    /// * `SharedSecret` - Both classes are configured with the same secret
    pub fn secret(&self, class: TokenClass) -> Result<&[u8], JwtError> {
        let secret = match class {
            TokenClass::Access => self.access_secret.as_deref(),
            TokenClass::Refresh => self.refresh_secret.as_deref(),
        }
        .filter(|s| !s.is_empty())
        .ok_or(JwtError::MissingSecret(class))?;

        if self.access_secret == self.refresh_secret {
            return Err(JwtError::SharedSecret);
        }

        Ok(secret.as_bytes())
    }

    /// Lifetime for a token class, in the class's unit.
    ///
    /// # Errors
    /// * `MissingTtl` - Lifetime is absent
    /// * `InvalidTtl` - Lifetime is zero or negative
    pub fn ttl(&self, class: TokenClass) -> Result<Duration, JwtError> {
        let amount = match class {
            TokenClass::Access => self.access_ttl_minutes,
            TokenClass::Refresh => self.refresh_ttl_hours,
        }
        .ok_or(JwtError::MissingTtl(class))?;

        class
            .ttl_from(amount)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or(JwtError::InvalidTtl {
                class,
                value: amount,
            })
    }

    /// Check that both classes can issue and verify tokens.
    pub fn validate(&self) -> Result<(), JwtError> {
        for class in [TokenClass::Access, TokenClass::Refresh] {
            self.secret(class)?;
            self.ttl(class)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");

        f.debug_struct("TokenConfig")
            .field("access_secret", &redact(&self.access_secret))
            .field("refresh_secret", &redact(&self.refresh_secret))
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}
