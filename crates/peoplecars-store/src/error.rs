//! Storage error types.
//!
//! [`StoreError`] covers the storage layer's failure modes: a not-found
//! variant per record type. Absent ids on the read path are represented as
//! `Option::None`, not errors; these variants are raised by the write-path
//! primitives (`put_*`, `remove_*`).

use thiserror::Error;

use peoplecars_core::{CarId, PersonId};

/// Errors produced by store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No person with the given id exists.
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// No car with the given id exists.
    #[error("car not found: {0}")]
    CarNotFound(CarId),
}
