//! Mango Chili Checkout - headless checkout engine.
//!
//! Drives the cart side panel through its four stages - cart review, delivery
//! address, payment, confirmation - and submits the finished order to the
//! remote order API.
//!
//! # Architecture
//!
//! The engine is a plain state machine ([`flow::CheckoutFlow`]) that holds no
//! collaborators of its own: the cart store and the order gateway are passed
//! into each action. That keeps the flow serializable, so the storefront can
//! park it in a session between requests, and keeps the engine testable with
//! in-memory doubles.
//!
//! - [`field`] - the eleven form fields and their delivery/payment grouping
//! - [`rules`] - per-field validation rule table (predicate + message)
//! - [`form`] - field values plus touched flags
//! - [`mask`] - fixed-pattern input shaping (postal code, card number, ...)
//! - [`cart`] - the injected cart-store interface and an in-memory impl
//! - [`gateway`] - the order-submission interface and its HTTP impl
//! - [`flow`] - the stage state machine tying it all together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod field;
pub mod flow;
pub mod form;
pub mod gateway;
pub mod mask;
pub mod rules;

pub use cart::{CartStore, InMemoryCartStore};
pub use field::Field;
pub use flow::{CheckoutError, CheckoutFlow, Outcome, Stage, SubmitStart};
pub use form::CheckoutForm;
pub use gateway::{GatewayError, HttpOrderGateway, OrderApiConfig, OrderGateway};
