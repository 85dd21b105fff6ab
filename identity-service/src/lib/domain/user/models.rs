use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered user as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: bool,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type.
///
/// Always strictly positive: ids are assigned by the database starting at 1,
/// so no value of this type can mean "no user".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Create a user ID.
    ///
    /// # Errors
    /// * `NotPositive` - Zero or negative value
    pub fn new(id: i64) -> Result<Self, UserIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(UserIdError::NotPositive(id))
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<u64> for UserId {
    type Error = UserIdError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        let id = i64::try_from(id).map_err(|_| UserIdError::OutOfRange(id))?;
        Self::new(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        // Positive by construction
        id.0 as u64
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Public view of a user, without credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProjection {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: bool,
}

impl From<&User> for UserProjection {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            status: user.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_zero_and_negative() {
        assert_eq!(UserId::new(0), Err(UserIdError::NotPositive(0)));
        assert_eq!(UserId::new(-3), Err(UserIdError::NotPositive(-3)));
        assert_eq!(UserId::new(1).map(|id| id.as_i64()), Ok(1));
    }

    #[test]
    fn test_user_id_from_claim_subject() {
        assert_eq!(UserId::try_from(42u64), UserId::new(42));
        assert_eq!(UserId::try_from(0u64), Err(UserIdError::NotPositive(0)));
        assert_eq!(
            UserId::try_from(u64::MAX),
            Err(UserIdError::OutOfRange(u64::MAX))
        );
        assert_eq!(u64::from(UserId::new(42).unwrap()), 42);
    }

    #[test]
    fn test_projection_drops_credentials() {
        let user = User {
            id: UserId::new(5).unwrap(),
            user_name: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            status: true,
            role: "admin".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let projection = UserProjection::from(&user);
        assert_eq!(projection.id, user.id);
        assert_eq!(projection.user_name, "jdoe");
        assert!(projection.status);
        assert!(!format!("{:?}", projection).contains("$2b$"));
    }
}
