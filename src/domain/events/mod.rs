//! Domain events.
//!
//! Raised by aggregates on significant transitions and drained by the
//! session shell, which logs them. Placement is the only transition this
//! core models.

use rust_decimal::Decimal;

#[derive(Clone, Debug)]
pub enum DomainEvent {
    Order(OrderEvent),
}

#[derive(Clone, Debug)]
pub enum OrderEvent {
    Placed {
        order_id: String,
        order_number: u64,
        total: Decimal,
    },
}
