use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use crate::catalog::{CatalogClient, FetchError, ProductFeed};
use crate::clients::CartClient;
use crate::config::ShopConfig;

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("cart service task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

/// The application root of a shopping session.
///
/// `ShopSystem` owns the one cart service of the session and the catalog
/// client every screen shares:
/// - **Catalog**: [`CatalogClient`] for the home feed and product details
/// - **Cart**: [`CartClient`] for the running cart service
///
/// # Example
///
/// ```rust,no_run
/// use glowcart::config::ShopConfig;
/// use glowcart::lifecycle::ShopSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ShopSystem::new(&ShopConfig::default())?;
///
///     let mut feed = system.feed();
///     let page = feed.load_more().await?.to_vec();
///     if let Some(product) = page.into_iter().next() {
///         system.cart.add_to_cart(product, 1).await?;
///     }
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ShopSystem {
    /// Client for the remote catalog
    pub catalog: CatalogClient,

    /// Client for the cart service
    pub cart: CartClient,

    page_size: u32,

    /// Cart service task, awaited on shutdown
    handle: JoinHandle<()>,
}

impl ShopSystem {
    /// Builds the catalog client and spawns the cart service.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Result<Self, FetchError> {
        let catalog = CatalogClient::new(config.catalog.clone())?;

        let (cart_actor, cart) = crate::cart_actor::new();
        let handle = tokio::spawn(cart_actor.run());

        info!(catalog_url = catalog.catalog_url(), "Shop started");
        Ok(Self {
            catalog,
            cart,
            page_size: config.page_size,
            handle,
        })
    }

    /// A fresh home feed paging through the catalog at the configured page size.
    pub fn feed(&self) -> ProductFeed<CatalogClient> {
        ProductFeed::with_limit(self.catalog.clone(), self.page_size)
    }

    /// Gracefully shuts down the cart service.
    ///
    /// Dropping the system's client closes the channel once every other clone
    /// is gone too; the service then exits its loop and this waits for it.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down shop...");
        drop(self.cart);

        if let Err(e) = self.handle.await {
            error!("Cart service task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Shop shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogClientConfig;
    use crate::model::{Product, ProductId};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_cart_is_shared_between_clones() {
        let system = ShopSystem::new(&ShopConfig::default()).unwrap();
        let product_screen = system.cart.clone();

        let mascara = Product::new(ProductId(9), "Mascara", Decimal::new(1100, 2), "thumb");
        product_screen.add_to_cart(mascara, 2).await.unwrap();
        drop(product_screen);

        assert_eq!(system.cart.total_items().await.unwrap(), 2);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_feed_uses_configured_page_size() {
        let config = ShopConfig {
            page_size: 7,
            ..ShopConfig::default()
        };
        let system = ShopSystem::new(&config).unwrap();
        assert_eq!(system.feed().limit(), 7);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_bad_catalog_url() {
        let config = ShopConfig {
            catalog: CatalogClientConfig::new("::nope::"),
            ..ShopConfig::default()
        };
        assert!(matches!(ShopSystem::new(&config), Err(FetchError::Url(_))));
    }
}
