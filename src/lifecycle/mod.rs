//! Startup and shutdown of the running shop.

pub mod shop_system;
pub mod tracing;

pub use shop_system::*;
pub use self::tracing::setup_tracing;
