use crate::domain::errors::{ErrorCode, RepositoryError};

/// Failures raised by the product service.
///
/// `AlreadyExists` and `NotFound` are business rejections the caller can act
/// on. `Repository` wraps storage faults and is reported as internal.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product {name} already registered in the system.")]
    AlreadyExists { name: String },
    #[error("Product with ID {id} not found.")]
    NotFound { id: i64 },
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    pub fn already_exists(name: impl Into<String>) -> Self {
        ProductError::AlreadyExists { name: name.into() }
    }

    pub fn not_found(id: i64) -> Self {
        ProductError::NotFound { id }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProductError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            ProductError::NotFound { .. } => ErrorCode::NotFound,
            ProductError::Repository(_) => ErrorCode::Internal,
        }
    }

    /// True for rule violations, false for infrastructure faults.
    pub fn is_business(&self) -> bool {
        !matches!(self, ProductError::Repository(_))
    }
}
