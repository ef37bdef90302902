use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Storage port for products.
///
/// Implementations must assign the id on `insert` and should report a
/// case-insensitive name collision detected at insert time as
/// `RepositoryError::Duplicated`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<Product>, RepositoryError>;
    /// Callers check existence first; deleting a missing id is unspecified.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
