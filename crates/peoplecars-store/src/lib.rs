//! Storage abstraction for people/cars records.
//!
//! Provides the [`RecordStore`] trait defining the storage contract, plus
//! [`InMemoryStore`] as the first-class backend.
//!
//! # Architecture
//!
//! The store is deliberately dumb: it offers CRUD primitives over two
//! ordered collections and allocates ids from per-collection monotonic
//! counters. Policy -- referential integrity on car creation, cascade
//! delete, partial vs full-replace update rules -- lives in the resolution
//! layer above, so a backend swap cannot change semantics.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with the not-found failure modes
//! - [`traits`]: RecordStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`seed`]: static sample dataset

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use traits::RecordStore;
