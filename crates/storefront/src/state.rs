//! Application state shared across handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

use mango_chili_checkout::{HttpOrderGateway, InMemoryCartStore};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the order gateway and the per-session carts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    gateway: HttpOrderGateway,
    carts: CartRegistry,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                gateway: HttpOrderGateway::new(&config.order_api),
                carts: CartRegistry::default(),
            }),
        }
    }

    /// Get a reference to the order API gateway.
    #[must_use]
    pub fn gateway(&self) -> &HttpOrderGateway {
        &self.inner.gateway
    }

    /// Get a reference to the cart registry.
    #[must_use]
    pub fn carts(&self) -> &CartRegistry {
        &self.inner.carts
    }
}

/// Per-session cart stores, keyed by the cart id held in the session.
///
/// The session carries only the id; the actual cart lives server-side and is
/// looked up per request.
#[derive(Default)]
pub struct CartRegistry {
    carts: Mutex<HashMap<Uuid, InMemoryCartStore>>,
}

impl CartRegistry {
    /// Fetch the cart for `id`, creating it on first use.
    #[must_use]
    pub fn get_or_create(&self, id: Uuid) -> InMemoryCartStore {
        self.carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_default()
            .clone()
    }
}
