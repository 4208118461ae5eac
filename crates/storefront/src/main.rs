//! Mango Chili Storefront - public food-ordering site.
//!
//! This binary serves the storefront API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON responses (the visual layer is a separate
//!   client consuming this API)
//! - `tower-sessions` with an in-memory store; the session carries the cart
//!   id and the serialized checkout flow
//! - The checkout engine itself lives in `mango-chili-checkout`; handlers
//!   only load the flow, apply one action, and store it back
//! - Orders go out through the HTTP order gateway configured by
//!   `ORDER_API_URL` / `ORDER_API_TOKEN`

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

mod config;
mod error;
mod routes;
mod session;
mod state;

use config::StorefrontConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "mango_chili_storefront=info,mango_chili_checkout=info,tower_http=debug".into()
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let addr = config.socket_addr();
    let state = AppState::new(&config);

    // Session layer: in-memory store, session cookie over plain HTTP in dev
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer),
        )
        .with_state(state);

    tracing::info!(%addr, "storefront listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

/// Liveness check.
async fn health() -> &'static str {
    "ok"
}
