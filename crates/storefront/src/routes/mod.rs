//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront home (navigation target)
//! GET  /health                 - Health check
//!
//! # Cart panel
//! GET  /cart                   - Cart panel view
//! POST /cart/add               - Add a menu item to the cart
//! POST /cart/remove            - Remove an item by id
//! POST /cart/open              - Open the side panel
//! POST /cart/close             - Close the side panel
//!
//! # Checkout flow
//! GET  /checkout               - Current checkout view
//! POST /checkout/field         - Record input for a field (mask applied)
//! POST /checkout/blur          - Mark a field touched
//! POST /checkout/continue      - Cart review -> delivery form (guarded)
//! POST /checkout/payment       - Delivery form -> payment form (guarded)
//! POST /checkout/back          - One stage back
//! POST /checkout/submit        - Submit the order (async, non-re-entrant)
//! POST /checkout/finish        - Acknowledge confirmation, redirect home
//! ```

pub mod cart;
pub mod checkout;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::state::AppState;

/// Create the cart panel routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create the checkout flow routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/field", post(checkout::field))
        .route("/blur", post(checkout::blur))
        .route("/continue", post(checkout::continue_to_delivery))
        .route("/payment", post(checkout::continue_to_payment))
        .route("/back", post(checkout::back))
        .route("/submit", post(checkout::submit))
        .route("/finish", post(checkout::finish))
}

/// Combine all route groups.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
}

/// Storefront home. The checkout's finish action navigates here.
async fn home() -> Json<Value> {
    Json(json!({ "name": "Mango Chili", "tagline": "Live deliciously" }))
}
