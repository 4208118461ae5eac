//! The injected cart-store interface.
//!
//! The checkout flow never owns the cart: it reads items, requests removal,
//! clears on a completed order, and signals the panel open/closed. Anything
//! implementing [`CartStore`] can back it; [`InMemoryCartStore`] is the
//! process-local implementation the storefront keys by session.

use std::sync::{Arc, Mutex, PoisonError};

use mango_chili_core::{CartItem, MenuItemId, Price};

/// Cart state as the checkout flow sees it.
///
/// Methods take `&self`; implementations are expected to be interior-mutable
/// and cheap to clone so handlers can share one store per session.
pub trait CartStore {
    /// Whether the cart side panel is currently open.
    fn is_open(&self) -> bool;

    /// Open or close the cart side panel.
    fn set_open(&self, open: bool);

    /// Snapshot of the current items.
    fn items(&self) -> Vec<CartItem>;

    /// Remove the item with the given id, if present.
    fn remove(&self, id: MenuItemId);

    /// Remove every item.
    fn clear(&self);

    /// Total of the current items, recomputed on every call.
    fn total(&self) -> Price {
        Price::total_of(&self.items())
    }
}

#[derive(Debug, Default)]
struct CartPanel {
    open: bool,
    items: Vec<CartItem>,
}

/// In-memory cart store, shared via `Arc` and locked per operation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStore {
    inner: Arc<Mutex<CartPanel>>,
}

impl InMemoryCartStore {
    /// An empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. This is the menu page's path, not the checkout flow's.
    pub fn add(&self, item: CartItem) {
        self.lock().items.push(item);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CartPanel> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStore for InMemoryCartStore {
    fn is_open(&self) -> bool {
        self.lock().open
    }

    fn set_open(&self, open: bool) {
        self.lock().open = open;
    }

    fn items(&self) -> Vec<CartItem> {
        self.lock().items.clone()
    }

    fn remove(&self, id: MenuItemId) {
        self.lock().items.retain(|item| item.id != id);
    }

    fn clear(&self) {
        self.lock().items.clear();
    }
}
