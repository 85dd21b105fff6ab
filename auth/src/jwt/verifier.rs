use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::claims::TokenClass;
use super::config::TokenConfig;
use super::errors::JwtError;

/// Algorithms accepted on incoming tokens.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Verifies tokens against the secret of the expected class.
///
/// Holds no state between calls: the outcome depends only on the token, the
/// expected class, the configuration and the current time.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    config: TokenConfig,
}

impl TokenVerifier {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Verify a token and return its claims.
    ///
    /// Checks, in order: the declared algorithm is HMAC, the signature
    /// matches the secret of `expected`, the `type` claim equals `expected`,
    /// and `exp` is strictly in the future.
    ///
    /// # Errors
    /// * `MissingSecret` / `SharedSecret` - No usable secret for `expected`
    /// * `UnexpectedAlgorithm` - Token declares a non-HMAC algorithm
    /// * `DecodingFailed` - Malformed token or bad signature
    /// * `ClassMismatch` - Token belongs to the other class
    /// * `TokenExpired` - Expiration is at or before now
    pub fn verify(&self, token: &str, expected: TokenClass) -> Result<TokenClaims, JwtError> {
        let secret = self.config.secret(expected)?;

        let header = decode_header(token).map_err(|e| JwtError::DecodingFailed(e.to_string()))?;
        if !HMAC_ALGORITHMS.contains(&header.alg) {
            return Err(JwtError::UnexpectedAlgorithm(format!("{:?}", header.alg)));
        }

        let mut validation = Validation::new(header.alg);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidAlgorithm => JwtError::UnexpectedAlgorithm(e.to_string()),
                _ => JwtError::DecodingFailed(e.to_string()),
            })?
            .claims;

        if claims.class != expected {
            return Err(JwtError::ClassMismatch {
                expected,
                found: claims.class,
            });
        }

        // Checked here as well so expiry never depends on the library's defaults
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
