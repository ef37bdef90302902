/// A product as stored, identity already assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: i32,
}

/// A product that has not been inserted yet. Storage assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: i32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String, price: f64, quantity_in_stock: i32) -> Self {
        Self {
            id,
            name,
            price,
            quantity_in_stock,
        }
    }
}
