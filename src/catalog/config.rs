//! Configuration types for catalog client construction.

use std::time::Duration;

/// Public catalog the app browses by default.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Size of the unpaginated batch fetched when the first page filters down too far.
pub const DEFAULT_FALLBACK_LIMIT: u32 = 100;

/// Configuration for catalog client construction.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL for the catalog API.
    pub catalog_url: String,
    /// Raw batch size of the first-page fallback fetch.
    pub fallback_limit: u32,
    /// Overall timeout for a single request.
    pub timeout: Duration,
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl CatalogClientConfig {
    /// Default settings pointed at `catalog_url`.
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(15),
            user_agent: None,
        }
    }
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}
