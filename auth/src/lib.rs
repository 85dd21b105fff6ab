//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the identity service:
//! - Password verification (bcrypt)
//! - Access/refresh token issuance and verification (HS256, one secret per class)
//! - Authentication coordination
//!
//! Nothing here performs I/O or holds state between calls.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenClass, TokenConfig, TokenIssuer, TokenVerifier};
//!
//! let config = TokenConfig::new("access-secret", "refresh-secret", 15, 24);
//! let issuer = TokenIssuer::new(config.clone());
//! let verifier = TokenVerifier::new(config);
//!
//! let issued = issuer.issue(42, TokenClass::Access).unwrap();
//! let claims = verifier.verify(&issued.token, TokenClass::Access).unwrap();
//! assert_eq!(claims.id, 42);
//!
//! // A token never verifies as the other class
//! assert!(verifier.verify(&issued.token, TokenClass::Refresh).is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenClass, TokenConfig};
//!
//! let auth = Authenticator::new(TokenConfig::new("access-secret", "refresh-secret", 15, 24));
//! let hash = PasswordHasher::with_cost(4).hash("password123").unwrap();
//!
//! // Login: verify and issue both tokens
//! let pair = auth.authenticate("password123", &hash, 42).unwrap();
//!
//! // Refresh: verify the refresh token, mint a new access token
//! let claims = auth.verify(&pair.refresh.token, TokenClass::Refresh).unwrap();
//! let access = auth.issue(claims.id, TokenClass::Access).unwrap();
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::TokenClaims;
pub use jwt::TokenClass;
pub use jwt::TokenConfig;
pub use jwt::TokenIssuer;
pub use jwt::TokenPair;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
