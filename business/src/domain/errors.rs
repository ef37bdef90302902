/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RepositoryError::DatabaseError(cause.into())
    }
}

/// Caller-visible status classification attached to every service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AlreadyExists,
    NotFound,
    /// Anything that is not a business rule rejection.
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
