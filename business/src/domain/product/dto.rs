/// Product data as received from a caller.
///
/// `id` is accepted for symmetry with the output shape but ignored on create.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: i32,
}

/// Product data returned to a caller. Always carries the stored id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOutput {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: i32,
}
