//! Error types for the order desk.

use crate::catalog::CatalogError;
use crate::model::{OrderId, ProductId};
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors returned by desk operations.
///
/// Every error is terminal for its request and leaves catalog and ledger
/// exactly as they were before the request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request is structurally invalid (no lines, zero quantity,
    /// unparseable body).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A requested product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The order does not exist.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// A line asks for more than the stock on hand or the per-line cap allows.
    #[error("Insufficient stock for {product_id}: requested {requested}, at most {allowed} allowed")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        allowed: u32,
    },

    /// The desk actor is not running.
    #[error("Order desk unavailable: {0}")]
    Unavailable(#[from] FrameworkError),
}

impl OrderError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrderError::ProductNotFound(_) | OrderError::OrderNotFound(_)
        )
    }
}

impl From<CatalogError> for OrderError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => OrderError::ProductNotFound(id),
            CatalogError::InsufficientStock {
                product_id,
                requested,
                available,
            } => OrderError::InsufficientStock {
                product_id,
                requested,
                allowed: available,
            },
        }
    }
}
