//! Type-safe wrappers around the service channels.

pub mod cart_client;

pub use cart_client::*;
