//! Domain types for the people/cars record service.
//!
//! This crate holds the two record types and their ID newtypes. It contains
//! no business logic: id assignment, referential integrity, and cascade
//! semantics live in the store and resolution layers.

pub mod id;
pub mod record;

// Re-export commonly used types
pub use id::{CarId, PersonId};
pub use record::{Car, Person, PersonWithCars};
