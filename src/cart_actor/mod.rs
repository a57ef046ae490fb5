//! # Cart Service
//!
//! The shopping cart, owned by a single task and reached through a typed client.
//!
//! ## Overview
//!
//! The [`Cart`](crate::model::Cart) aggregate is a plain synchronous type. In the
//! running app it lives inside a [`CartActor`], which the application root
//! spawns once per session. Views hold a cloned
//! [`CartClient`](crate::clients::CartClient) instead of a global store.
//!
//! ## Structure
//!
//! - [`actor`] - [`CartActor`], the message loop that owns the cart
//! - [`message`] - [`CartRequest`] and the reply channel type
//! - [`error`] - [`CartError`]
//! - [`mock`] - helpers for testing clients without an actor
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use glowcart::cart_actor;
//! use glowcart::model::{Product, ProductId};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, cart) = cart_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let gloss = Product::new(ProductId(1), "Lip Gloss", Decimal::new(999, 2), "x");
//!     cart.add_to_cart(gloss, 3).await?;
//!     assert_eq!(cart.total_price().await?, Decimal::new(2997, 2));
//!
//!     let order = cart.checkout().await?;
//!     assert_eq!(order.total_items, 3);
//!     assert_eq!(cart.total_items().await?, 0);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::CartClient;

/// Request buffer of the session cart.
pub const CART_BUFFER_SIZE: usize = 32;

/// Creates a new cart actor and its client.
pub fn new() -> (CartActor, CartClient) {
    CartActor::new(CART_BUFFER_SIZE)
}
