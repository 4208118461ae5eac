//! Cart item type shared by the cart panel and the checkout flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::MenuItemId;

/// A menu item sitting in the cart panel.
///
/// The add path (menu page to cart) owns construction; the checkout flow only
/// reads items and requests removal by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    pub photo_url: String,
    pub unit_price: Decimal,
}
