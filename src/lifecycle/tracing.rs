//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by the
//! `glowcart` binary.
//!
//! ## Configuration
//!
//! Output uses the compact format without the crate/module prefix
//! (`with_target(false)`), and levels come from `RUST_LOG`.
//!
//! ```bash
//! # Cart mutations, checkout and fetch failures
//! RUST_LOG=info cargo run
//!
//! # Every request, including skipped catalog records
//! RUST_LOG=debug cargo run
//!
//! # Only the catalog
//! RUST_LOG=glowcart::catalog=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Cart service**: startup, every mutation with the affected line and
//!   quantity, checkout totals, shutdown with the remaining line count
//! - **Catalog**: each request URL at debug, non-success statuses and skipped
//!   records at warn
//! - **Client calls**: every [`CartClient`](crate::clients::CartClient)
//!   mutation runs in its own span named after the method
//!
//! With `RUST_LOG=info` a short session reads:
//!
//! ```text
//! INFO Cart service started
//! INFO add_to_cart:Added product_id=product_1 line_quantity=3 lines=1
//! INFO checkout:Checked out total_items=3 total_price=29.97
//! INFO Cart service shutdown lines=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
