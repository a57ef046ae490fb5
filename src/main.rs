//! Demo session: browse the first page of the catalog, put the first product in
//! the cart and check out.

use glowcart::config::ShopConfig;
use glowcart::lifecycle::{setup_tracing, ShopSystem};
use glowcart::model::clamp_quantity;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ShopConfig::from_env()?;
    let system = ShopSystem::new(&config)?;

    let span = tracing::info_span!("browse");
    let first = async {
        let mut feed = system.feed();
        match feed.load_more().await {
            Ok(page) => {
                let first = page.first().cloned();
                info!(count = feed.products().len(), has_more = feed.has_more(), "First page loaded");
                first
            }
            Err(e) => {
                error!(error = %e, "Could not load products");
                None
            }
        }
    }
    .instrument(span)
    .await;

    match first {
        Some(product) => {
            let span = tracing::info_span!("shopping", product_id = %product.id);
            async {
                info!(title = %product.title, price = %product.price, "Adding to cart");
                system.cart.add_to_cart(product, clamp_quantity(2)).await?;

                let total_items = system.cart.total_items().await?;
                let total_price = system.cart.total_price().await?;
                info!(total_items, %total_price, "Cart updated");

                let order = system.cart.checkout().await?;
                info!(lines = order.items.len(), total = %order.total_price, "Order placed");
                Ok::<_, glowcart::cart_actor::CartError>(())
            }
            .instrument(span)
            .await?;
        }
        None => warn!("Nothing to buy"),
    }

    system.shutdown().await?;

    info!("Session complete");
    Ok(())
}
