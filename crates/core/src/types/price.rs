//! Type-safe price representation using decimal arithmetic.
//!
//! Menu prices go through display formatting and order totals, so they use
//! `rust_decimal` instead of floats. The cart panel recomputes its total from
//! the current items on every view; nothing is cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// A price in the store currency's standard unit (e.g., dollars, not cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price (the total of an empty cart).
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Sum the unit prices of the given cart items.
    ///
    /// An empty iterator yields [`Price::ZERO`].
    pub fn total_of<'a>(items: impl IntoIterator<Item = &'a CartItem>) -> Self {
        Self(items.into_iter().map(|item| item.unit_price).sum())
    }

    /// Format for display (e.g., `$19.99`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0.round_dp(2))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::id::MenuItemId;

    fn item(id: i32, price: Decimal) -> CartItem {
        CartItem {
            id: MenuItemId::new(id),
            name: format!("item-{id}"),
            photo_url: String::new(),
            unit_price: price,
        }
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        let items: Vec<CartItem> = Vec::new();
        assert_eq!(Price::total_of(&items), Price::ZERO);
    }

    #[test]
    fn test_total_of_sums_unit_prices() {
        let items = vec![item(1, dec!(10)), item(2, dec!(5.5))];
        assert_eq!(Price::total_of(&items), Price::new(dec!(15.5)));
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::new(dec!(15.5)).display(), "$15.50");
        assert_eq!(Price::new(dec!(9)).display(), "$9.00");
        assert_eq!(Price::ZERO.display(), "$0.00");
    }
}
