use poem_openapi::Object;

use business::domain::product::dto::{ProductInput, ProductOutput};

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name, unique regardless of letter case
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units currently in stock
    pub quantity_in_stock: i32,
}

impl From<CreateProductRequest> for ProductInput {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            price: request.price,
            quantity_in_stock: request.quantity_in_stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Identifier assigned on creation
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units currently in stock
    pub quantity_in_stock: i32,
}

impl From<ProductOutput> for ProductResponse {
    fn from(output: ProductOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            price: output.price,
            quantity_in_stock: output.quantity_in_stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// Every stored product, in storage order
    pub products: Vec<ProductResponse>,
}
