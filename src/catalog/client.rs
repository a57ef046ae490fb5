//! HTTP client for the remote product catalog.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::catalog::filter::{is_beauty_product, is_beauty_record};
use crate::catalog::normalize::normalize;
use crate::catalog::{CatalogClientConfig, FetchError, RecordError};
use crate::model::{Product, ProductId, ProductsPage, RawProduct};

/// Products per page when the caller has no preference.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Raw records requested per wanted product, to make up for filter attrition.
pub const OVERFETCH_FACTOR: u32 = 3;

/// The catalog operations the app depends on.
///
/// This trait enables alternate implementations:
/// - **HTTP**: REST calls to the remote catalog via [`CatalogClient`]
/// - **In-memory**: canned products in tests
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch up to `limit` beauty products starting at raw offset `skip`.
    ///
    /// Requests `limit * 3` raw records, filters them with the beauty keyword
    /// filter and normalizes the survivors. When `skip == 0` and fewer than
    /// `limit` survive, the filtered set is replaced by the filtered result of
    /// one larger unpaginated batch. The remote ordering is preserved.
    async fn get_products(&self, skip: u32, limit: u32) -> Result<Vec<Product>, FetchError>;

    /// Fetch and normalize a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, FetchError>;
}

/// A client for the remote catalog service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    config: CatalogClientConfig,
}

impl Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("catalog_url", &self.config.catalog_url)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogClientConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.catalog_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| FetchError::Url(config.catalog_url.clone()))?;
        let http = build_http_client(&config)?;

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// Get the configured catalog URL.
    pub fn catalog_url(&self) -> &str {
        &self.config.catalog_url
    }

    /// Appends `segments` to the base URL's path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(self.config.catalog_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            warn!(%status, %url, "catalog request failed");
            return Err(FetchError::Status { status, url });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `GET /products`, with `skip` when given.
    async fn fetch_page(&self, skip: Option<u32>, limit: u32) -> Result<Vec<Value>, FetchError> {
        let url = self.endpoint(&["products"])?;
        let mut request = self.http.get(url);
        if let Some(skip) = skip {
            request = request.query(&[("skip", skip)]);
        }
        request = request.query(&[("limit", limit)]);

        let page: ProductsPage = self.fetch_json(request).await?;
        debug!(?skip, limit, received = page.products.len(), "fetched catalog page");
        Ok(page.products)
    }
}

/// Decodes and normalizes a raw batch and keeps the beauty products, in order.
///
/// Records that cannot be decoded or normalized are dropped. The drop is logged
/// at `warn` when the record would have been shown, at `debug` otherwise.
fn beauty_products(batch: Vec<Value>) -> Vec<Product> {
    batch
        .into_iter()
        .filter_map(|record| match decode_record(&record) {
            Ok(product) => Some(product),
            Err(error) if is_beauty_record(&record) => {
                warn!(%error, id = ?record.get("id"), "skipping catalog record");
                None
            }
            Err(error) => {
                debug!(%error, id = ?record.get("id"), "skipping catalog record");
                None
            }
        })
        .filter(is_beauty_product)
        .collect()
}

fn decode_record(record: &Value) -> Result<Product, FetchError> {
    let raw = RawProduct::deserialize(record)?;
    Ok(normalize(raw)?)
}

#[async_trait]
impl CatalogService for CatalogClient {
    #[instrument(skip(self))]
    async fn get_products(&self, skip: u32, limit: u32) -> Result<Vec<Product>, FetchError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let wanted = limit as usize;

        let batch = self
            .fetch_page(Some(skip), limit.saturating_mul(OVERFETCH_FACTOR))
            .await?;
        let mut products = beauty_products(batch);

        if skip == 0 && products.len() < wanted {
            debug!(
                matched = products.len(),
                fallback_limit = self.config.fallback_limit,
                "first page too thin, fetching fallback batch"
            );
            let batch = self.fetch_page(None, self.config.fallback_limit).await?;
            products = beauty_products(batch);
        }

        products.truncate(wanted);
        debug!(count = products.len(), "returning products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let url = self.endpoint(&["products", &id.0.to_string()])?;
        let record: RawProduct = self.fetch_json(self.http.get(url)).await?;
        let product = normalize(record)?;
        if product.id != id {
            warn!(received = %product.id, "catalog answered with another product");
            return Err(RecordError::IdMismatch {
                requested: id,
                received: product.id,
            }
            .into());
        }
        debug!(title = %product.title, "fetched product");
        Ok(product)
    }
}

fn build_http_client(config: &CatalogClientConfig) -> Result<reqwest::Client, FetchError> {
    debug!(
        catalog_url = %config.catalog_url,
        timeout = ?config.timeout,
        has_user_agent = config.user_agent.is_some(),
        "building catalog HTTP client"
    );

    let client_builder = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout);

    let client_builder = if let Some(ref user_agent) = config.user_agent {
        client_builder.user_agent(user_agent)
    } else {
        client_builder
    };

    Ok(client_builder.build()?)
}
