use super::dto::{ProductInput, ProductOutput};
use super::model::{NewProduct, Product};

/// Drops any caller-supplied id; identity comes from storage.
pub fn to_new_product(input: ProductInput) -> NewProduct {
    NewProduct {
        name: input.name,
        price: input.price,
        quantity_in_stock: input.quantity_in_stock,
    }
}

pub fn to_output(product: Product) -> ProductOutput {
    ProductOutput {
        id: product.id,
        name: product.name,
        price: product.price,
        quantity_in_stock: product.quantity_in_stock,
    }
}
