use std::error::Error as StdError;
use std::fmt;

/// Closed set of failure kinds.
///
/// Only the HTTP boundary inspects the kind, to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    ValidationError,
    ResourceAlreadyExists,
    RepositoryError,
    NotAuthenticated,
    NotAuthorized,
    TokenGeneratorError,
    UnknownError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::NotFound,
        ErrorKind::ValidationError,
        ErrorKind::ResourceAlreadyExists,
        ErrorKind::RepositoryError,
        ErrorKind::NotAuthenticated,
        ErrorKind::NotAuthorized,
        ErrorKind::TokenGeneratorError,
        ErrorKind::UnknownError,
    ];

    /// Kind name as used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::ValidationError => "ValidationError",
            ErrorKind::ResourceAlreadyExists => "ResourceAlreadyExists",
            ErrorKind::RepositoryError => "RepositoryError",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::NotAuthorized => "NotAuthorized",
            ErrorKind::TokenGeneratorError => "TokenGeneratorError",
            ErrorKind::UnknownError => "UnknownError",
        }
    }

    /// Canonical message used when no underlying error is supplied.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "record not found",
            ErrorKind::ValidationError => "validation error",
            ErrorKind::ResourceAlreadyExists => "resource already exists",
            ErrorKind::RepositoryError => "error in repository operation",
            ErrorKind::NotAuthenticated => "not Authenticated",
            ErrorKind::NotAuthorized => "not authorized",
            ErrorKind::TokenGeneratorError => "error in token generation",
            ErrorKind::UnknownError => "something went wrong",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a kind by name. Unlisted names fall back to `UnknownError`.
impl From<&str> for ErrorKind {
    fn from(name: &str) -> Self {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or(ErrorKind::UnknownError)
    }
}

/// Application error: an underlying error tagged with its kind.
///
/// Created where the failure is detected and propagated unchanged.
pub struct AppError {
    kind: ErrorKind,
    error: Box<dyn StdError + Send + Sync>,
}

impl AppError {
    /// Wrap an underlying error (or message) with a kind.
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>, kind: ErrorKind) -> Self {
        Self {
            kind,
            error: error.into(),
        }
    }

    /// Error of the given kind carrying its canonical message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind.default_message(), kind)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}
