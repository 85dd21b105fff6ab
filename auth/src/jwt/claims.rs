use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Class of a signed token.
///
/// Each class has its own signing secret and lifetime; a token carries
/// exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Short-lived, authorizes API requests. Lifetime configured in minutes.
    Access,
    /// Long-lived, only mints new access tokens. Lifetime configured in hours.
    Refresh,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Access => "access",
            TokenClass::Refresh => "refresh",
        }
    }

    /// Convert a configured lifetime amount into a duration using this
    /// class's unit. `None` if the amount does not fit a duration.
    pub fn ttl_from(&self, amount: i64) -> Option<Duration> {
        match self {
            TokenClass::Access => Duration::try_minutes(amount),
            TokenClass::Refresh => Duration::try_hours(amount),
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenClass {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenClass::Access),
            "refresh" => Ok(TokenClass::Refresh),
            other => Err(JwtError::UnknownTokenClass(other.to_string())),
        }
    }
}

/// Payload of a signed token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (principal identifier)
    pub id: u64,

    /// Token class
    #[serde(rename = "type")]
    pub class: TokenClass,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(id: u64, class: TokenClass, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            class,
            exp: expires_at.timestamp(),
        }
    }

    /// Expiration as a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if the token is expired. A token expiring exactly now is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

/// A freshly signed token together with the metadata callers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub class: TokenClass,
    pub expires_at: DateTime<Utc>,
}

/// Access and refresh token issued together at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}
