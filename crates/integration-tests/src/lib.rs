//! Integration test support for Mango Chili.
//!
//! The scenario tests in `tests/` drive the real checkout engine against the
//! in-memory cart store and the scripted gateway defined here. No network, no
//! server process: the engine is headless by design, so "integration" means
//! the full flow - cart review, delivery, payment, submission, confirmation -
//! wired together exactly as the storefront wires it.

use std::sync::Mutex;

use mango_chili_checkout::{CartStore, GatewayError, InMemoryCartStore, OrderGateway};
use mango_chili_core::{CartItem, MenuItemId, OrderId, OrderReceipt, OrderRequest};
use rust_decimal::Decimal;

/// Gateway double that pops queued results, recording every request it saw.
#[derive(Default)]
pub struct ScriptedGateway {
    results: Mutex<Vec<Result<OrderReceipt, GatewayError>>>,
    requests: Mutex<Vec<OrderRequest>>,
}

impl ScriptedGateway {
    /// A gateway that will answer the next submit with a receipt.
    #[must_use]
    pub fn succeeding(order_id: &str) -> Self {
        let gateway = Self::default();
        gateway.push_ok(order_id);
        gateway
    }

    /// A gateway that will reject the next submit.
    #[must_use]
    pub fn failing() -> Self {
        let gateway = Self::default();
        gateway.push_err(500, "internal error");
        gateway
    }

    /// Queue a successful result.
    pub fn push_ok(&self, order_id: &str) {
        self.lock_results().push(Ok(OrderReceipt {
            order_id: OrderId::new(order_id),
        }));
    }

    /// Queue a rejection.
    pub fn push_err(&self, status: u16, body: &str) {
        self.lock_results().push(Err(GatewayError::Rejected {
            status,
            body: body.to_string(),
        }));
    }

    /// Every order request the gateway has received, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.lock_requests().clone()
    }

    /// Number of calls received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.lock_requests().len()
    }

    fn lock_results(&self) -> std::sync::MutexGuard<'_, Vec<Result<OrderReceipt, GatewayError>>> {
        self.results
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<OrderRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl OrderGateway for ScriptedGateway {
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, GatewayError> {
        self.lock_requests().push(order.clone());
        self.lock_results().pop().unwrap_or_else(|| {
            Err(GatewayError::Rejected {
                status: 500,
                body: "unscripted call".to_string(),
            })
        })
    }
}

/// A cart preloaded with the given `(id, price)` pairs, panel open.
#[must_use]
pub fn cart_with(lines: &[(i32, Decimal)]) -> InMemoryCartStore {
    let cart = InMemoryCartStore::new();
    cart.set_open(true);
    for &(id, price) in lines {
        cart.add(CartItem {
            id: MenuItemId::new(id),
            name: format!("item-{id}"),
            photo_url: format!("https://cdn.example.com/{id}.png"),
            unit_price: price,
        });
    }
    cart
}
