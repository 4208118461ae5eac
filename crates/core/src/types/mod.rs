//! Core types for Mango Chili.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;

pub use cart::CartItem;
pub use id::*;
pub use order::{
    CardExpiry, CardInfo, DeliveryAddress, DeliveryInfo, OrderReceipt, OrderRequest, PaymentInfo,
    ProductLine,
};
pub use price::Price;
