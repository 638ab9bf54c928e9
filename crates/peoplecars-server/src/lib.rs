//! HTTP/JSON API server for the people/cars record service.
//!
//! Exposes the full read/write surface over a single endpoint accepting a
//! structured query document. This crate contains the server framework, API
//! schema types, error handling, route definition, and the resolution layer
//! ([`service::RegistryService`]) that owns all business logic.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
