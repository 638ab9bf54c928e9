//! HTTP handler modules for the people/cars API.
//!
//! The single handler parses the query document, acquires the service lock,
//! delegates to [`crate::service::RegistryService`], and returns a JSON
//! response. No business logic lives here.

pub mod resolve;
