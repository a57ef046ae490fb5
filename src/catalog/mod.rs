//! # Catalog
//!
//! Everything between the app and the remote product catalog.
//!
//! ## Structure
//!
//! - [`client`] - [`CatalogService`] trait and its HTTP implementation [`CatalogClient`]
//! - [`filter`] - the beauty keyword filter
//! - [`normalize`] - raw record validation and default-filling
//! - [`feed`] - [`ProductFeed`], the paginated home-screen list
//! - [`error`] - [`FetchError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glowcart::catalog::{CatalogClient, CatalogClientConfig, CatalogService, ProductFeed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogClientConfig::default())?;
//!
//!     let mut feed = ProductFeed::new(client.clone());
//!     while feed.has_more() {
//!         feed.load_more().await?;
//!     }
//!
//!     if let Some(first) = feed.products().first() {
//!         let details = client.get_product(first.id).await?;
//!         println!("{} by {}", details.title, details.brand);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod normalize;

pub use client::{CatalogClient, CatalogService, DEFAULT_PAGE_LIMIT, OVERFETCH_FACTOR};
pub use config::{CatalogClientConfig, DEFAULT_CATALOG_URL, DEFAULT_FALLBACK_LIMIT};
pub use error::{FetchError, RecordError};
pub use feed::ProductFeed;
pub use filter::{is_beauty_product, is_beauty_record, BEAUTY_KEYWORDS};
pub use normalize::{normalize, DEFAULT_BRAND};
