use async_trait::async_trait;

use super::dto::{ProductInput, ProductOutput};
use super::errors::ProductError;

#[async_trait]
pub trait ProductService: Send + Sync {
    /// Fails with `AlreadyExists` when the name is taken, ignoring case.
    async fn create(&self, input: ProductInput) -> Result<ProductOutput, ProductError>;
    async fn find_by_id(&self, id: i64) -> Result<ProductOutput, ProductError>;
    /// Not idempotent: deleting an id twice fails with `NotFound` the second time.
    async fn delete(&self, id: i64) -> Result<(), ProductError>;
    async fn find_all(&self) -> Result<Vec<ProductOutput>, ProductError>;
}
