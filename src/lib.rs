//! Storefront Session Core
//!
//! In-memory state model for a storefront client: catalog browsing with
//! search and category filtering, a shopping cart, order placement, and
//! the screen-navigation state machine that ties them together.
//!
//! ## Features
//! - Injected, read-only product catalog with a pure derived filter
//! - Cart aggregation with price snapshots and a strict qty >= 1 floor
//! - Atomic checkout into an immutable, most-recent-first order ledger
//! - Screen navigation as a finite state machine driven by user intents
//!
//! Rendering, styling, networking, and persistence are external
//! collaborators; nothing in this crate outlives the session.

use thiserror::Error;

pub mod catalog;
pub mod domain;
pub mod session;

pub use catalog::{filter_products, CatalogSource, InMemoryCatalog};
pub use domain::aggregates::{
    Cart, CartLine, Category, CategorySelection, Order, OrderLedger, OrderStatus, Product, Review,
};
pub use domain::events::{DomainEvent, OrderEvent};
pub use domain::value_objects::Money;
pub use session::{Intent, Session, Tab, ViewState};

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised by the storefront core.
///
/// Both variants are local and recoverable: they block the offending
/// transition, leave all state untouched, and are surfaced to the
/// rendering layer to present as it sees fit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A navigation or cart intent targeted a product id the catalog
    /// source cannot resolve.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Checkout or order placement was attempted against an empty cart.
    #[error("cannot check out an empty cart")]
    EmptyCartCheckout,
}

pub type Result<T> = std::result::Result<T, StoreError>;
