//! # Glowcart
//!
//! > **The core of a beauty-product shopping app.**
//!
//! Glowcart browses a remote product catalog, narrows it to beauty products,
//! and keeps a shopping cart with derived totals. Screens and views are not
//! part of this crate; they drive it through the clients below.
//!
//! ## Design
//!
//! ### 1. One Cart per Session
//! The [`Cart`](model::Cart) is owned by a single [`CartActor`](cart_actor::CartActor)
//! task. Every view holds a cloned [`CartClient`](clients::CartClient), so
//! requests are applied one at a time in arrival order and two quick taps on
//! "Add to Cart" always give two units.
//!
//! ### 2. Exact Money
//! Prices are [`rust_decimal::Decimal`]. Totals are exact sums of
//! `price * quantity` and never pick up float drift.
//!
//! ### 3. Typed Errors
//! Each layer has its own `thiserror` enum: [`FetchError`](catalog::FetchError)
//! for the catalog, [`CartError`](cart_actor::CartError) for the cart service,
//! [`ConfigError`](config::ConfigError) for startup.
//!
//! ### 4. Observability
//! `tracing` is used everywhere with structured fields.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## Module Tour
//!
//! - [`model`] - [`Product`](model::Product), [`Cart`](model::Cart) and the raw wire records
//! - [`catalog`] - HTTP catalog client, beauty filter, record normalization, paginated feed
//! - [`cart_actor`] - the cart service task and its messages
//! - [`clients`] - [`CartClient`](clients::CartClient)
//! - [`lifecycle`] - [`ShopSystem`](lifecycle::ShopSystem) wiring and tracing setup
//! - [`config`] - [`ShopConfig`](config::ShopConfig) from `GLOWCART_*` variables
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch the first page, add a product, check out
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
