//! Error types for the cart service.

use thiserror::Error;

/// Errors that can occur when talking to the cart service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart service task has stopped accepting requests.
    #[error("Cart service closed")]
    ServiceClosed,

    /// The cart service dropped the reply channel without answering.
    #[error("Cart service dropped response channel")]
    ServiceDropped,

    /// Checkout was requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,
}
