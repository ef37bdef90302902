use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::converter;
use crate::domain::product::dto::{ProductInput, ProductOutput};
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::service::ProductService;

pub struct ProductServiceImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ProductServiceImpl {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }

    async fn check_duplicity(&self, name: &str) -> Result<(), ProductError> {
        if let Some(existing) = self.repository.find_by_name_ignore_case(name).await? {
            self.logger.debug(&format!(
                "Product name '{}' collides with product {}",
                name, existing.id
            ));
            return Err(ProductError::already_exists(name));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create(&self, input: ProductInput) -> Result<ProductOutput, ProductError> {
        self.logger.info(&format!("Creating product: {}", input.name));

        self.check_duplicity(&input.name).await?;

        let new_product = converter::to_new_product(input);
        // A unique index may still reject the insert if a concurrent create won.
        let product = self
            .repository
            .insert(&new_product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::already_exists(&new_product.name),
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product created with id: {}", product.id));
        Ok(converter::to_output(product))
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductOutput, ProductError> {
        self.logger.info(&format!("Fetching product by id: {}", id));

        self.repository
            .find_by_id(id)
            .await?
            .map(converter::to_output)
            .ok_or_else(|| ProductError::not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), ProductError> {
        self.logger.info(&format!("Deleting product: {}", id));

        let product = self.find_by_id(id).await?;
        self.repository.delete_by_id(product.id).await?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ProductOutput>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.list_all().await?;
        self.logger.info(&format!("Found {} products", products.len()));
        Ok(products.into_iter().map(converter::to_output).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorCode;
    use crate::domain::product::model::{NewProduct, Product};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
            async fn find_by_name_ignore_case(
                &self,
                name: &str,
            ) -> Result<Option<Product>, RepositoryError>;
            async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
            async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn service(repo: MockProductRepo) -> ProductServiceImpl {
        ProductServiceImpl::new(Arc::new(repo), mock_logger())
    }

    fn product(id: i64, name: &str, price: f64, quantity_in_stock: i32) -> Product {
        Product::from_repository(id, name.to_string(), price, quantity_in_stock)
    }

    fn input(id: Option<i64>, name: &str, price: f64, quantity_in_stock: i32) -> ProductInput {
        ProductInput {
            id,
            name: name.to_string(),
            price,
            quantity_in_stock,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_name_is_free() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name_ignore_case()
            .returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .withf(|p| p.name == "Celular" && p.price == 2000.0 && p.quantity_in_stock == 1)
            .times(1)
            .returning(|p| Ok(product(1, &p.name, p.price, p.quantity_in_stock)));

        let result = service(mock_repo)
            .create(input(None, "Celular", 2000.0, 1))
            .await;

        let output = result.unwrap();
        assert_eq!(output.id, 1);
        assert_eq!(output.name, "Celular");
        assert_eq!(output.price, 2000.0);
        assert_eq!(output.quantity_in_stock, 1);
    }

    #[tokio::test]
    async fn should_use_storage_id_instead_of_caller_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name_ignore_case()
            .returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .returning(|p| Ok(product(5, &p.name, p.price, p.quantity_in_stock)));

        let output = service(mock_repo)
            .create(input(Some(99), "Monitor", 800.0, 2))
            .await
            .unwrap();

        assert_eq!(output.id, 5);
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_without_inserting() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name_ignore_case()
            .withf(|name| name == "celular")
            .returning(|_| Ok(Some(product(1, "Celular", 2000.0, 1))));
        mock_repo.expect_insert().never();

        let err = service(mock_repo)
            .create(input(Some(1), "celular", 2000.0, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::AlreadyExists { .. }));
        assert_eq!(err.code(), ErrorCode::AlreadyExists);
        assert_eq!(err.to_string(), "Product celular already registered in the system.");
    }

    #[tokio::test]
    async fn should_report_already_exists_when_insert_hits_unique_index() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name_ignore_case()
            .returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let err = service(mock_repo)
            .create(input(None, "Televisão LG", 2500.99, 10))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Product Televisão LG already registered in the system."
        );
    }

    #[tokio::test]
    async fn should_surface_storage_failure_as_internal_on_create() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name_ignore_case()
            .returning(|_| Err(RepositoryError::database_error("connection refused")));
        mock_repo.expect_insert().never();

        let err = service(mock_repo)
            .create(input(None, "Celular", 2000.0, 1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProductError::Repository(RepositoryError::DatabaseError(_))
        ));
        assert_eq!(err.code(), ErrorCode::Internal);
    }

    #[tokio::test]
    async fn should_return_product_when_id_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(product(1, "Celular", 2000.0, 1))));

        let output = service(mock_repo).find_by_id(1).await.unwrap();

        assert_eq!(output.id, 1);
        assert_eq!(output.name, "Celular");
        assert_eq!(output.price, 2000.0);
        assert_eq!(output.quantity_in_stock, 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_is_unknown() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(mock_repo).find_by_id(999).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound { id: 999 }));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Product with ID 999 not found.");
    }

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Ok(Some(product(1, "Celular", 2000.0, 1))));
        mock_repo
            .expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock_repo).delete(1).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_delete_when_product_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete_by_id().never();

        let err = service(mock_repo).delete(1).await.unwrap_err();

        assert_eq!(err.to_string(), "Product with ID 1 not found.");
    }

    #[tokio::test]
    async fn should_return_all_products_in_storage_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_all().returning(|| {
            Ok(vec![
                product(2, "Televisão LG", 2000.0, 1),
                product(1, "Celular", 2000.0, 1),
            ])
        });

        let outputs = service(mock_repo).find_all().await.unwrap();

        let ids: Vec<i64> = outputs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(outputs[0].name, "Televisão LG");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list_all().returning(|| Ok(vec![]));

        let outputs = service(mock_repo).find_all().await.unwrap();

        assert!(outputs.is_empty());
    }
}
