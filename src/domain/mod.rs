//! Domain layer: value objects, aggregates, and domain events.

pub mod aggregates;
pub mod events;
pub mod value_objects;
