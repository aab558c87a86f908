//! Startup and shutdown of the running system.

pub mod order_system;

pub use order_system::*;
