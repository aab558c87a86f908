//! Error types for the catalog.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

}

/// Rejections raised while building a catalog from seed products.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeedError {
    /// Two seed products share an identifier.
    #[error("Duplicate product: {0}")]
    Duplicate(ProductId),

    /// A seed product has a negative or non-finite price.
    #[error("Invalid price for {product_id}: {price}")]
    InvalidPrice { product_id: ProductId, price: f64 },
}
