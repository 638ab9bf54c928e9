//! Binary entrypoint for the people/cars HTTP server.
//!
//! Reads configuration from environment variables:
//! - `PEOPLECARS_PORT`: Server listen port (default: "4000")

use peoplecars_server::router::build_router;
use peoplecars_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PEOPLECARS_PORT")
        .unwrap_or_else(|_| "4000".to_string());

    let state = AppState::seeded();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("peoplecars server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
