//! # Cart Messages
//!
//! The message types exchanged between [`CartClient`](crate::clients::CartClient)
//! and [`CartActor`](crate::cart_actor::CartActor).
//!
//! Each variant maps to one cart operation and carries a one-shot channel for
//! the reply. Cart operations themselves cannot fail, so replies are plain
//! values except for [`CartRequest::Checkout`].

use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::cart_actor::CartError;
use crate::model::{CartLineItem, CartSummary, Product, ProductId};

/// Type alias for the one-shot response channel used by the cart service.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the cart service.
#[derive(Debug)]
pub enum CartRequest {
    Add {
        product: Product,
        quantity: u32,
        respond_to: Response<u32>,
    },
    Remove {
        id: ProductId,
        respond_to: Response<Option<CartLineItem>>,
    },
    UpdateQuantity {
        id: ProductId,
        quantity: i64,
        respond_to: Response<u32>,
    },
    Increment {
        id: ProductId,
        respond_to: Response<u32>,
    },
    Decrement {
        id: ProductId,
        respond_to: Response<u32>,
    },
    Clear {
        respond_to: Response<()>,
    },
    TotalPrice {
        respond_to: Response<Decimal>,
    },
    TotalItems {
        respond_to: Response<u64>,
    },
    ItemQuantity {
        id: ProductId,
        respond_to: Response<u32>,
    },
    Snapshot {
        respond_to: Response<CartSummary>,
    },
    /// Mock checkout: reply with the cart's summary, then empty it.
    Checkout {
        respond_to: Response<Result<CartSummary, CartError>>,
    },
}
