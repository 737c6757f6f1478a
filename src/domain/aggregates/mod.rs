//! Aggregates module.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{Cart, CartLine};
pub use order::{Order, OrderLedger, OrderStatus};
pub use product::{Category, CategorySelection, Product, Review};
