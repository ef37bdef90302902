use std::sync::Arc;

use business::application::product::service::ProductServiceImpl;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use crate::api::health::routes::Api as HealthApi;
use crate::api::hello::routes::HelloApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub hello_api: HelloApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Services
        let product_service = Arc::new(ProductServiceImpl::new(product_repository, logger));

        Self {
            health_api: HealthApi::new(),
            hello_api: HelloApi::new(),
            product_api: ProductApi::new(product_service),
        }
    }
}
