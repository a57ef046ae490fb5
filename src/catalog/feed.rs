//! The paginated product feed behind the home screen.
//!
//! [`ProductFeed`] drives [`CatalogService::get_products`] the way an
//! infinite-scroll list does: it keeps a running `skip` cursor that starts at 0
//! and advances by the page limit after each successful load, accumulates the
//! products, and stops once a load returns fewer than `limit` products.
//!
//! Loading takes `&mut self`, so one feed can never have two loads in flight.

use tracing::{debug, info, instrument};

use crate::catalog::{CatalogService, FetchError, DEFAULT_PAGE_LIMIT};
use crate::model::Product;

/// Accumulating, cursor-driven view over a [`CatalogService`].
#[derive(Debug)]
pub struct ProductFeed<C> {
    catalog: C,
    limit: u32,
    skip: u32,
    products: Vec<Product>,
    has_more: bool,
}

impl<C: CatalogService> ProductFeed<C> {
    /// A feed with the default page limit of 20.
    pub fn new(catalog: C) -> Self {
        Self::with_limit(catalog, DEFAULT_PAGE_LIMIT)
    }

    pub fn with_limit(catalog: C, limit: u32) -> Self {
        Self {
            catalog,
            limit: limit.max(1),
            skip: 0,
            products: Vec::new(),
            has_more: true,
        }
    }

    /// Loads the next page and appends it.
    ///
    /// Returns the newly appended products, which is empty once the feed is
    /// exhausted. On error the feed is left exactly as it was, so the same
    /// page can be retried.
    #[instrument(skip(self), fields(skip = self.skip, limit = self.limit))]
    pub async fn load_more(&mut self) -> Result<&[Product], FetchError> {
        if !self.has_more {
            debug!("feed exhausted");
            return Ok(&[]);
        }

        let batch = self.catalog.get_products(self.skip, self.limit).await?;
        let start = self.products.len();
        self.accept(batch);
        self.skip = self.skip.saturating_add(self.limit);

        info!(
            loaded = self.products.len() - start,
            total = self.products.len(),
            has_more = self.has_more,
            "loaded page"
        );
        Ok(&self.products[start..])
    }

    /// Reloads from the beginning, replacing everything loaded so far.
    ///
    /// On error the previous contents are kept.
    #[instrument(skip(self), fields(limit = self.limit))]
    pub async fn refresh(&mut self) -> Result<&[Product], FetchError> {
        let batch = self.catalog.get_products(0, self.limit).await?;
        self.products.clear();
        self.accept(batch);
        self.skip = self.limit;

        info!(total = self.products.len(), has_more = self.has_more, "refreshed feed");
        Ok(&self.products)
    }

    fn accept(&mut self, batch: Vec<Product>) {
        self.has_more = batch.len() >= self.limit as usize;
        self.products.extend(batch);
    }

    /// Everything loaded so far, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Raw offset of the next page.
    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use rust_decimal::Decimal;

    use super::*;
    use crate::model::ProductId;

    /// In-memory catalog serving `total` products, `limit` at a time.
    #[derive(Clone, Default)]
    struct StaticCatalog {
        total: u32,
        fail: Arc<AtomicBool>,
        calls: Arc<AtomicUsize>,
    }

    impl StaticCatalog {
        fn with_products(total: u32) -> Self {
            Self {
                total,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl CatalogService for StaticCatalog {
        async fn get_products(&self, skip: u32, limit: u32) -> Result<Vec<Product>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(FetchError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    url: "memory://products".to_string(),
                });
            }
            let end = self.total.min(skip.saturating_add(limit));
            Ok((skip..end)
                .map(|id| Product::new(ProductId(id), "Glow Serum", Decimal::ONE, "thumb"))
                .collect())
        }

        async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
            Ok(Product::new(id, "Glow Serum", Decimal::ONE, "thumb"))
        }
    }

    #[tokio::test]
    async fn test_pages_until_short_batch() {
        let catalog = StaticCatalog::with_products(45);
        let mut feed = ProductFeed::new(catalog.clone());

        assert_eq!(feed.load_more().await.unwrap().len(), 20);
        assert_eq!(feed.skip(), 20);
        assert!(feed.has_more());

        assert_eq!(feed.load_more().await.unwrap().len(), 20);
        assert_eq!(feed.load_more().await.unwrap().len(), 5);
        assert!(!feed.has_more());
        assert_eq!(feed.products().len(), 45);

        // Exhausted: no further requests.
        assert!(feed.load_more().await.unwrap().is_empty());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failure_leaves_state_untouched() {
        let catalog = StaticCatalog::with_products(100);
        let mut feed = ProductFeed::new(catalog.clone());
        feed.load_more().await.unwrap();

        catalog.fail.store(true, Ordering::SeqCst);
        assert!(feed.load_more().await.is_err());
        assert_eq!(feed.skip(), 20);
        assert_eq!(feed.products().len(), 20);
        assert!(feed.has_more());

        catalog.fail.store(false, Ordering::SeqCst);
        let page = feed.load_more().await.unwrap();
        assert_eq!(page[0].id, ProductId(20));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_loaded_products() {
        let catalog = StaticCatalog::with_products(100);
        let mut feed = ProductFeed::new(catalog.clone());
        feed.load_more().await.unwrap();
        feed.load_more().await.unwrap();

        catalog.fail.store(true, Ordering::SeqCst);
        assert!(feed.refresh().await.is_err());
        assert_eq!(feed.products().len(), 40);
        assert_eq!(feed.skip(), 40);
        assert!(feed.has_more());
        assert_eq!(feed.products()[39].id, ProductId(39));
    }

    #[tokio::test]
    async fn test_refresh_restarts_from_zero() {
        let catalog = StaticCatalog::with_products(30);
        let mut feed = ProductFeed::new(catalog);
        feed.load_more().await.unwrap();
        feed.load_more().await.unwrap();
        assert!(!feed.has_more());

        let products = feed.refresh().await.unwrap();
        assert_eq!(products.len(), 20);
        assert_eq!(feed.skip(), 20);
        assert!(feed.has_more());
        assert_eq!(feed.products()[0].id, ProductId(0));
    }

    #[tokio::test]
    async fn test_zero_limit_is_raised_to_one() {
        let mut feed = ProductFeed::with_limit(StaticCatalog::with_products(2), 0);
        assert_eq!(feed.limit(), 1);
        assert_eq!(feed.load_more().await.unwrap().len(), 1);
    }
}
