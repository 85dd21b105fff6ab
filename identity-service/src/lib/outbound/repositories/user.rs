use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::errors::AppError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

const SELECT_USER: &str = r#"
    SELECT id, user_name, email, first_name, last_name, status, role,
           password_hash, created_at, updated_at
    FROM users
"#;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    user_name: String,
    email: String,
    first_name: String,
    last_name: String,
    status: bool,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id).map_err(|e| AppError::new(e, ErrorKind::RepositoryError))?;

        Ok(User {
            id,
            user_name: row.user_name,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            status: row.status,
            role: row.role,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn repository_error(e: sqlx::Error) -> AppError {
    AppError::new(e, ErrorKind::RepositoryError)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE email = $1", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        row.map(User::try_from).transpose()
    }
}
