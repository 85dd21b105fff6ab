use chrono::SubsecRound;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::IssuedToken;
use super::claims::TokenClaims;
use super::claims::TokenClass;
use super::config::TokenConfig;
use super::errors::JwtError;

/// Signs new tokens.
///
/// Every token is signed with HS256 and the secret of its own class.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: TokenConfig,
}

impl TokenIssuer {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Issue a token for a subject.
    ///
    /// # Arguments
    /// * `subject_id` - Principal identifier stored in the `id` claim
    /// * `class` - Token class, selects secret and lifetime
    ///
    /// # Returns
    /// Signed token with its class and expiration (`now + TTL`, whole seconds)
    ///
    /// # Errors
    /// * `MissingSecret` / `SharedSecret` / `MissingTtl` / `InvalidTtl` - Configuration unusable
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, subject_id: u64, class: TokenClass) -> Result<IssuedToken, JwtError> {
        let secret = self.config.secret(class)?;
        let ttl = self.config.ttl(class)?;

        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::EncodingFailed("expiration out of range".to_string()))?
            .trunc_subsecs(0);

        let claims = TokenClaims::new(subject_id, class, expires_at);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            class,
            expires_at,
        })
    }
}
