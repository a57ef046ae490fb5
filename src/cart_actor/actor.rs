//! # Cart Service Actor
//!
//! [`CartActor`] is the server half of the cart service. It owns the [`Cart`]
//! and the receiving end of the request channel, and applies requests one at a
//! time in arrival order. Because nothing else can reach the cart, two taps that
//! race each other in the UI still produce two well-ordered mutations.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cart_actor::{CartError, CartRequest};
use crate::clients::CartClient;
use crate::model::Cart;

/// Owns a [`Cart`] and serves [`CartRequest`]s until every client is dropped.
#[derive(Debug)]
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
}

impl CartActor {
    /// Creates an actor around an empty cart, and the client that talks to it.
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            cart: Cart::new(),
        };
        (actor, CartClient::new(sender))
    }

    /// Runs the event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!("Cart service started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(lines = self.cart.len(), "Cart service shutdown");
    }

    fn handle(&mut self, msg: CartRequest) {
        // A dropped reply channel means the caller went away; the mutation stands.
        match msg {
            CartRequest::Add {
                product,
                quantity,
                respond_to,
            } => {
                debug!(product_id = %product.id, quantity, "Add");
                let line_quantity = self.cart.add_to_cart(&product, quantity);
                info!(product_id = %product.id, line_quantity, lines = self.cart.len(), "Added");
                let _ = respond_to.send(line_quantity);
            }
            CartRequest::Remove { id, respond_to } => {
                let removed = self.cart.remove_from_cart(id);
                info!(product_id = %id, removed = removed.is_some(), lines = self.cart.len(), "Removed");
                let _ = respond_to.send(removed);
            }
            CartRequest::UpdateQuantity {
                id,
                quantity,
                respond_to,
            } => {
                debug!(product_id = %id, quantity, "UpdateQuantity");
                let line_quantity = self.cart.update_quantity(id, quantity);
                info!(product_id = %id, line_quantity, "Updated");
                let _ = respond_to.send(line_quantity);
            }
            CartRequest::Increment { id, respond_to } => {
                let line_quantity = self.cart.increment(id);
                debug!(product_id = %id, line_quantity, "Increment");
                let _ = respond_to.send(line_quantity);
            }
            CartRequest::Decrement { id, respond_to } => {
                let line_quantity = self.cart.decrement(id);
                debug!(product_id = %id, line_quantity, "Decrement");
                let _ = respond_to.send(line_quantity);
            }
            CartRequest::Clear { respond_to } => {
                self.cart.clear_cart();
                info!("Cleared");
                let _ = respond_to.send(());
            }
            CartRequest::TotalPrice { respond_to } => {
                let _ = respond_to.send(self.cart.total_price());
            }
            CartRequest::TotalItems { respond_to } => {
                let _ = respond_to.send(self.cart.total_items());
            }
            CartRequest::ItemQuantity { id, respond_to } => {
                let _ = respond_to.send(self.cart.item_quantity(id));
            }
            CartRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.cart.summary());
            }
            CartRequest::Checkout { respond_to } => {
                if self.cart.is_empty() {
                    warn!("Checkout on empty cart");
                    let _ = respond_to.send(Err(CartError::EmptyCart));
                    return;
                }
                let summary = self.cart.summary();
                self.cart.clear_cart();
                info!(
                    total_items = summary.total_items,
                    total_price = %summary.total_price,
                    "Checked out"
                );
                let _ = respond_to.send(Ok(summary));
            }
        }
    }
}
