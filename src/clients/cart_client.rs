//! # Cart Client
//!
//! Provides a high-level API for interacting with the cart service.
//! It wraps the request channel and exposes one async method per cart operation.

use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::cart_actor::{CartError, CartRequest, Response};
use crate::model::{CartLineItem, CartSummary, Product, ProductId};

/// Client for interacting with the cart service.
///
/// Holds only a sender, so cloning is inexpensive; every view that needs the
/// cart gets its own clone.
#[derive(Debug, Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> CartRequest,
    ) -> Result<T, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CartError::ServiceClosed)?;
        response.await.map_err(|_| CartError::ServiceDropped)
    }

    /// Adds `quantity` units of `product`, returning the line's new quantity.
    ///
    /// Callers offering a quantity picker clamp it first with
    /// [`clamp_quantity`](crate::model::clamp_quantity).
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product, quantity: u32) -> Result<u32, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Add {
            product,
            quantity,
            respond_to,
        })
        .await
    }

    /// Removes the line for `id`, returning it if it existed.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<Option<CartLineItem>, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Remove { id, respond_to })
            .await
    }

    /// Sets the line quantity; zero or less removes the line.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ProductId, quantity: i64) -> Result<u32, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::UpdateQuantity {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    /// One more unit of an existing line.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: ProductId) -> Result<u32, CartError> {
        self.request(|respond_to| CartRequest::Increment { id, respond_to })
            .await
    }

    /// One less unit of an existing line, never below 1.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: ProductId) -> Result<u32, CartError> {
        self.request(|respond_to| CartRequest::Decrement { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Clear { respond_to })
            .await
    }

    pub async fn total_price(&self) -> Result<Decimal, CartError> {
        self.request(|respond_to| CartRequest::TotalPrice { respond_to })
            .await
    }

    pub async fn total_items(&self) -> Result<u64, CartError> {
        self.request(|respond_to| CartRequest::TotalItems { respond_to })
            .await
    }

    pub async fn item_quantity(&self, id: ProductId) -> Result<u32, CartError> {
        self.request(|respond_to| CartRequest::ItemQuantity { id, respond_to })
            .await
    }

    /// Current line items and totals.
    pub async fn snapshot(&self) -> Result<CartSummary, CartError> {
        self.request(|respond_to| CartRequest::Snapshot { respond_to })
            .await
    }

    /// Places a mock order: returns what was in the cart and empties it.
    ///
    /// Fails with [`CartError::EmptyCart`] when there is nothing to check out.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Checkout { respond_to })
            .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::mock::{create_mock_client, expect_request};

    fn serum() -> Product {
        Product::new(ProductId(3), "Glow Serum", Decimal::new(1500, 2), "thumb")
    }

    #[tokio::test]
    async fn test_add_to_cart_sends_product_and_quantity() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_to_cart(serum(), 4).await });

        match expect_request(&mut receiver).await {
            Some(CartRequest::Add {
                product,
                quantity,
                respond_to,
            }) => {
                assert_eq!(product.id, ProductId(3));
                assert_eq!(quantity, 4);
                respond_to.send(4).unwrap();
            }
            other => panic!("Expected Add request, got {other:?}"),
        }

        assert_eq!(add_task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_update_quantity_passes_negative_through() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.update_quantity(ProductId(3), -5).await });

        match expect_request(&mut receiver).await {
            Some(CartRequest::UpdateQuantity {
                id,
                quantity,
                respond_to,
            }) => {
                assert_eq!(id, ProductId(3));
                assert_eq!(quantity, -5);
                respond_to.send(0).unwrap();
            }
            other => panic!("Expected UpdateQuantity request, got {other:?}"),
        }

        assert_eq!(task.await.unwrap().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_checkout_surfaces_empty_cart() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.checkout().await });

        match expect_request(&mut receiver).await {
            Some(CartRequest::Checkout { respond_to }) => {
                respond_to.send(Err(CartError::EmptyCart)).unwrap();
            }
            other => panic!("Expected Checkout request, got {other:?}"),
        }

        assert_eq!(task.await.unwrap(), Err(CartError::EmptyCart));
    }

    #[tokio::test]
    async fn test_closed_service() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(client.total_items().await, Err(CartError::ServiceClosed));
    }

    #[tokio::test]
    async fn test_dropped_reply() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.clear_cart().await });
        let request = expect_request(&mut receiver).await;
        assert!(matches!(request, Some(CartRequest::Clear { .. })));
        drop(request);

        assert_eq!(task.await.unwrap(), Err(CartError::ServiceDropped));
    }
}
