use super::errors::PasswordError;

/// Password hashing and verification.
///
/// Uses bcrypt: the stored hash carries its own cost factor and salt, so
/// nothing besides the hash string needs to be persisted.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the bcrypt default cost.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            cost: ::bcrypt::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// Only affects [`hash`](Self::hash); verification reads the cost from
    /// the stored hash.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (`$2b$<cost>$<salt><hash>`)
    ///
    /// # Errors
    /// * `HashingFailed` - Cost out of range or hashing failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        ::bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored bcrypt hash
    ///
    /// # Returns
    /// True if password matches. False on mismatch and on a malformed hash.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match ::bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
