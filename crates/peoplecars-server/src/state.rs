//! Application state with the shared `RegistryService` for handler access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime. The record model assumes a single writer at a time, so
//! one service-wide lock is the whole concurrency story.

use std::sync::Arc;

use peoplecars_store::InMemoryStore;

use crate::service::RegistryService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared registry service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<RegistryService<InMemoryStore>>>,
}

impl AppState {
    /// Creates an `AppState` seeded with the static sample dataset.
    pub fn seeded() -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(RegistryService::new(
                InMemoryStore::with_sample_data(),
            ))),
        }
    }

    /// Creates an `AppState` with an empty store (for testing).
    pub fn empty() -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(RegistryService::new(
                InMemoryStore::new(),
            ))),
        }
    }
}
