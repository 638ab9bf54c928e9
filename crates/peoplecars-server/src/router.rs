//! Router assembly for the people/cars HTTP API.
//!
//! [`build_router`] wires the single query endpoint with CORS and tracing
//! middleware layers.

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router.
///
/// The whole read/write surface is one endpoint: `POST /query` accepts a
/// structured query document naming the operation and its arguments. CORS is
/// permissive (the browser client calls from another origin). TraceLayer
/// provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/query", post(handlers::resolve::resolve))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
