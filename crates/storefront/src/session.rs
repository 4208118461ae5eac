//! Session plumbing for the cart panel and the checkout flow.
//!
//! The session itself stays small: it carries the cart id (the cart lives in
//! the server-side registry) and the serialized checkout flow. Handlers load
//! the flow, apply one action, and store it back.

use tower_sessions::Session;
use uuid::Uuid;

use mango_chili_checkout::{CheckoutFlow, InMemoryCartStore};

use crate::error::Result;
use crate::state::AppState;

/// Session keys.
pub mod keys {
    pub const CART_ID: &str = "cart.id";
    pub const CHECKOUT_FLOW: &str = "checkout.flow";
}

/// The session's cart store, creating cart and id on first use.
pub async fn cart_for(session: &Session, state: &AppState) -> Result<InMemoryCartStore> {
    let id = match session.get::<Uuid>(keys::CART_ID).await? {
        Some(id) => id,
        None => {
            let id = Uuid::new_v4();
            session.insert(keys::CART_ID, id).await?;
            id
        }
    };
    Ok(state.carts().get_or_create(id))
}

/// The session's checkout flow, starting fresh on the cart stage if absent.
pub async fn load_flow(session: &Session) -> Result<CheckoutFlow> {
    Ok(session
        .get::<CheckoutFlow>(keys::CHECKOUT_FLOW)
        .await?
        .unwrap_or_default())
}

/// Store the flow back into the session.
pub async fn save_flow(session: &Session, flow: &CheckoutFlow) -> Result<()> {
    session.insert(keys::CHECKOUT_FLOW, flow).await?;
    Ok(())
}
