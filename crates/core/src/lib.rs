//! Mango Chili Core - Shared types library.
//!
//! This crate provides common types used across all Mango Chili components:
//! - `checkout` - Headless checkout engine (cart panel, delivery, payment)
//! - `storefront` - Public-facing food-ordering site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the cart
//!   item and order wire shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
