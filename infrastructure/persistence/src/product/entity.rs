use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.price, self.quantity_in_stock)
    }
}
