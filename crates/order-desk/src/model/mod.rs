//! Pure data structures shared by the catalog, the ledger and the HTTP layer.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
