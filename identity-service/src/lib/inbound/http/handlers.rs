use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::authentication::models::AuthenticatedSession;
use crate::domain::authentication::models::SessionTokens;
use crate::domain::errors::AppError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::models::UserProjection;

pub mod access_token;
pub mod current_user;
pub mod login;

/// Message sent for every server-side failure whose details stay internal.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        ApiSuccess(status, Json(body))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl ApiError {
    pub fn not_authenticated() -> Self {
        ApiError::Unauthorized(ErrorKind::NotAuthenticated.default_message().to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            ErrorKind::ValidationError => ApiError::BadRequest(err.to_string()),
            ErrorKind::ResourceAlreadyExists => ApiError::Conflict(err.to_string()),
            ErrorKind::NotAuthorized => ApiError::Forbidden(err.to_string()),
            ErrorKind::NotAuthenticated => ApiError::not_authenticated(),
            ErrorKind::RepositoryError => {
                tracing::error!(error = %err, "Repository operation failed");
                ApiError::InternalServerError(err.kind().default_message().to_string())
            }
            ErrorKind::TokenGeneratorError | ErrorKind::UnknownError => {
                tracing::error!(kind = %err.kind(), error = %err, "Request failed");
                ApiError::InternalServerError(INTERNAL_SERVER_ERROR_MESSAGE.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Body returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub data: UserData,
    pub security: SecurityData,
}

impl From<AuthenticatedSession> for SessionResponseData {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            data: (&session.user).into(),
            security: session.security.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: bool,
    pub id: i64,
}

impl From<&UserProjection> for UserData {
    fn from(user: &UserProjection) -> Self {
        Self {
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            status: user.status,
            id: user.id.as_i64(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityData {
    #[serde(rename = "jwtAccessToken")]
    pub access_token: String,
    #[serde(rename = "jwtRefreshToken")]
    pub refresh_token: String,
    #[serde(rename = "expirationAccessDateTime")]
    pub access_expires_at: DateTime<Utc>,
    #[serde(rename = "expirationRefreshDateTime")]
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<SessionTokens> for SecurityData {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            access_expires_at: tokens.access_expires_at,
            refresh_expires_at: tokens.refresh_expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serde_json::Value;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_canonical_message() {
        let (status, body) = render(AppError::from_kind(ErrorKind::NotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "record not found" }));
    }

    #[tokio::test]
    async fn test_unlisted_kind_renders_internal_server_error() {
        let err = AppError::new("boom", ErrorKind::from("BogusKind"));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_status_for_every_kind() {
        let expected = [
            (ErrorKind::NotFound, StatusCode::NOT_FOUND),
            (ErrorKind::ValidationError, StatusCode::BAD_REQUEST),
            (ErrorKind::ResourceAlreadyExists, StatusCode::CONFLICT),
            (ErrorKind::RepositoryError, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorKind::NotAuthenticated, StatusCode::UNAUTHORIZED),
            (ErrorKind::NotAuthorized, StatusCode::FORBIDDEN),
            (ErrorKind::TokenGeneratorError, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorKind::UnknownError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (kind, status) in expected {
            let (actual, _) = render(AppError::from_kind(kind)).await;
            assert_eq!(actual, status, "kind {}", kind);
        }
    }

    #[tokio::test]
    async fn test_client_errors_keep_their_message() {
        let err = AppError::new("email or password does not match", ErrorKind::NotAuthorized);
        let (_, body) = render(err).await;
        assert_eq!(body, json!({ "error": "email or password does not match" }));

        let err = AppError::new("password is required", ErrorKind::ValidationError);
        let (_, body) = render(err).await;
        assert_eq!(body, json!({ "error": "password is required" }));
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        let err = AppError::new("connection refused on 10.0.0.3", ErrorKind::RepositoryError);
        let (_, body) = render(err).await;
        assert_eq!(body, json!({ "error": "error in repository operation" }));

        let err = AppError::new("signature key missing", ErrorKind::NotAuthenticated);
        let (_, body) = render(err).await;
        assert_eq!(body, json!({ "error": "not Authenticated" }));

        let err = AppError::new("missing secret for access tokens", ErrorKind::TokenGeneratorError);
        let (_, body) = render(err).await;
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[test]
    fn test_session_response_wire_shape() {
        use crate::domain::user::models::UserId;

        let expires = DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let session = AuthenticatedSession {
            user: UserProjection {
                id: UserId::new(7).unwrap(),
                user_name: "jdoe".to_string(),
                email: "u@x.com".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                status: true,
            },
            security: SessionTokens {
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
                access_expires_at: expires,
                refresh_expires_at: expires,
            },
        };

        let value = serde_json::to_value(SessionResponseData::from(session)).unwrap();
        assert_eq!(
            value,
            json!({
                "data": {
                    "userName": "jdoe",
                    "email": "u@x.com",
                    "firstName": "John",
                    "lastName": "Doe",
                    "status": true,
                    "id": 7
                },
                "security": {
                    "jwtAccessToken": "access",
                    "jwtRefreshToken": "refresh",
                    "expirationAccessDateTime": "2024-01-01T10:00:00Z",
                    "expirationRefreshDateTime": "2024-01-01T10:00:00Z"
                }
            })
        );
    }
}
