//! # Mock Cart Service
//!
//! Utilities for testing code that holds a [`CartClient`] without running a
//! [`CartActor`](crate::cart_actor::CartActor).
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then [`expect_request`] to pull the next request and answer it by
//! hand.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::cart_actor::CartRequest;
use crate::clients::CartClient;

/// How long [`expect_request`] waits before giving up.
pub const EXPECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Creates a client whose requests land in the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Waits for the next request, or `None` if none arrives in time or every
/// client has been dropped.
pub async fn expect_request(receiver: &mut mpsc::Receiver<CartRequest>) -> Option<CartRequest> {
    tokio::time::timeout(EXPECT_TIMEOUT, receiver.recv())
        .await
        .ok()
        .flatten()
}
