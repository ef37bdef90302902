use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::errors::ErrorCode;
use business::domain::product::service::ProductService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductListResponse, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    service: Arc<dyn ProductService>,
}

impl ProductApi {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

/// Product catalog RPC surface
///
/// Create, fetch, delete and list products. Business rejections come back
/// with an `ALREADY_EXISTS` or `NOT_FOUND` classification.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// Fails with 409 when another product already uses the same name,
    /// ignoring letter case.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.service.create(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let code = err.code();
                let (_status, json) = err.into_error_response();
                match code {
                    ErrorCode::AlreadyExists => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn find_all_products(&self) -> FindAllProductsResponse {
        match self.service.find_all().await {
            Ok(products) => FindAllProductsResponse::Ok(Json(ProductListResponse {
                products: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FindAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn find_product_by_id(&self, id: Path<i64>) -> FindProductByIdResponse {
        match self.service.find_by_id(id.0).await {
            Ok(product) => FindProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let code = err.code();
                let (_status, json) = err.into_error_response();
                match code {
                    ErrorCode::NotFound => FindProductByIdResponse::NotFound(json),
                    _ => FindProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Deleting an id that does not exist, including one already deleted,
    /// answers 404.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self.service.delete(id.0).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let code = err.code();
                let (_status, json) = err.into_error_response();
                match code {
                    ErrorCode::NotFound => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
