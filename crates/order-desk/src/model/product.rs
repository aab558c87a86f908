//! Represents a purchasable product and its live stock.
//!
//! Products are seeded when the desk starts and afterwards only their
//! `available` quantity changes, always downwards, and only inside an order
//! transaction.
//!
//! Serialized with the field names of the public catalog:
//! `id`, `name`, `category`, `price`, `availability`.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Open set of product category labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// The label that counts towards the premium discount.
    pub const PREMIUM: &'static str = "Premium";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn premium() -> Self {
        Self::new(Self::PREMIUM)
    }

    pub fn is_premium(&self) -> bool {
        self.0 == Self::PREMIUM
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Unit price. Never negative.
    pub price: f64,
    /// Units currently in stock.
    #[serde(rename = "availability")]
    pub available: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique, stable identifier
    /// * `name` - Product name
    /// * `category` - Category label (e.g. `"Premium"`)
    /// * `price` - Unit price
    /// * `available` - Units in stock
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        available: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category: Category::new(category),
            price,
            available,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.category.is_premium()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_catalog_field_names() {
        let product = Product::new(1, "Product1", "Premium", 100.0, 10);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Product1",
                "category": "Premium",
                "price": 100.0,
                "availability": 10,
            })
        );
    }

    #[test]
    fn only_the_exact_premium_label_is_premium() {
        assert!(Category::premium().is_premium());
        assert!(!Category::new("premium").is_premium());
        assert!(!Category::new("Budget").is_premium());
    }
}
