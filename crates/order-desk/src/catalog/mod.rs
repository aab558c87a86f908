//! # Catalog Store
//!
//! The authoritative set of products and their live stock.
//!
//! The store does no locking of its own. It is owned by the
//! [`OrderDesk`](crate::desk::OrderDesk) actor, and the desk's request loop is
//! the atomicity boundary: a check followed by a decrement inside one desk
//! request can never interleave with another request.

pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Builds a catalog from seed products.
    ///
    /// Rejects duplicate identifiers and prices that are negative or not
    /// finite, so every total computed later stays non-negative.
    pub fn from_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, SeedError> {
        let mut catalog = Self::default();
        for product in products {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(SeedError::InvalidPrice {
                    product_id: product.id,
                    price: product.price,
                });
            }
            if catalog.products.contains_key(&product.id) {
                return Err(SeedError::Duplicate(product.id));
            }
            catalog.products.insert(product.id, product);
        }
        Ok(catalog)
    }

    /// The catalog the service starts with.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::from_products([
            Product::new(1, "Product1", "Premium", 100.0, 10),
            Product::new(2, "Product2", "Regular", 150.0, 20),
            Product::new(3, "Product3", "Budget", 200.0, 30),
            Product::new(4, "Product4", "Premium", 100.0, 50),
            Product::new(5, "Product5", "Premium", 90.0, 25),
            Product::new(6, "Product6", "Budget", 200.0, 15),
        ])
    }

    pub fn get(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.products.get(&id).ok_or(CatalogError::NotFound(id))
    }

    /// Takes `quantity` units of a product and returns the product as it
    /// stands afterwards. Stock is left untouched on error.
    pub fn decrement(&mut self, id: ProductId, quantity: u32) -> Result<Product, CatalogError> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        product.available = product.available.checked_sub(quantity).ok_or(
            CatalogError::InsufficientStock {
                product_id: id,
                requested: quantity,
                available: product.available,
            },
        )?;
        Ok(product.clone())
    }

    /// Returns units taken by an aborted transaction.
    pub(crate) fn restore(&mut self, id: ProductId, quantity: u32) {
        if let Some(product) = self.products.get_mut(&id) {
            product.available = product.available.saturating_add(quantity);
        }
    }

    /// All products, ordered by identifier.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
