//! Order aggregate and the session order ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::aggregates::{Cart, CartLine};
use crate::domain::events::{DomainEvent, OrderEvent};
use crate::domain::value_objects::Money;
use crate::{Result, StoreError};

/// A placed order. Immutable after creation: the lines are a deep
/// snapshot of the cart at placement time and the total is frozen, so
/// later cart or catalog changes cannot reach back into history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    id: String,
    order_number: u64,
    placed_at: DateTime<Utc>,
    lines: Vec<CartLine>,
    total: Money,
    status: OrderStatus,
}

impl Order {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Per-session sequence number, starting at 1. Display identity for
    /// receipts ("ORD-0001"); the UUID `id` is the stable key.
    pub fn order_number(&self) -> u64 {
        self.order_number
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> &Money {
        &self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

/// Order status. Fixed at `Processing` on placement; no further
/// lifecycle is modeled by this core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Processing => write!(f, "Processing"),
        }
    }
}

/// Session-scoped order history.
///
/// Orders are prepended on placement, so `history()` reads most recent
/// first without re-sorting.
#[derive(Debug)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_number: u64,
    events: Vec<DomainEvent>,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self { orders: vec![], next_number: 1, events: vec![] }
    }

    /// Converts the cart into a new order atomically: either the order
    /// is created and the cart cleared, or (empty cart) nothing changes.
    pub fn place_order(&mut self, cart: &mut Cart) -> Result<&Order> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCartCheckout);
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            order_number: self.next_number,
            placed_at: Utc::now(),
            lines: cart.lines().to_vec(),
            total: cart.total(),
            status: OrderStatus::Processing,
        };
        self.next_number += 1;

        self.events.push(DomainEvent::Order(OrderEvent::Placed {
            order_id: order.id.clone(),
            order_number: order.order_number,
            total: order.total.amount(),
        }));

        self.orders.insert(0, order);
        cart.clear();
        Ok(&self.orders[0])
    }

    /// Order history, most recent first.
    pub fn history(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
