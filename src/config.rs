//! # Application Configuration
//!
//! [`ShopConfig`] gathers the settings the shop needs at startup. Values come
//! from `GLOWCART_*` environment variables (a `.env` file is honored), and any
//! variable left unset keeps its default.
//!
//! | Variable | Default |
//! |---|---|
//! | `GLOWCART_CATALOG_URL` | `https://dummyjson.com` |
//! | `GLOWCART_PAGE_SIZE` | `20` |
//! | `GLOWCART_FALLBACK_LIMIT` | `100` |
//! | `GLOWCART_HTTP_TIMEOUT_SECS` | `60` |
//! | `GLOWCART_USER_AGENT` | unset |

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::info;
use url::Url;

use crate::catalog::{CatalogClientConfig, DEFAULT_PAGE_LIMIT};

pub const CATALOG_URL_VAR: &str = "GLOWCART_CATALOG_URL";
pub const PAGE_SIZE_VAR: &str = "GLOWCART_PAGE_SIZE";
pub const FALLBACK_LIMIT_VAR: &str = "GLOWCART_FALLBACK_LIMIT";
pub const HTTP_TIMEOUT_VAR: &str = "GLOWCART_HTTP_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "GLOWCART_USER_AGENT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid {var}={value:?}: {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Settings for a [`ShopSystem`](crate::lifecycle::ShopSystem).
#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub catalog: CatalogClientConfig,
    /// Products per feed page.
    pub page_size: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogClientConfig::default(),
            page_size: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ShopConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        info!(
            catalog_url = %config.catalog.catalog_url,
            page_size = config.page_size,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CATALOG_URL_VAR) {
            let url = Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
                var: CATALOG_URL_VAR,
                value: value.clone(),
                source,
            })?;
            if url.cannot_be_a_base() {
                return Err(ConfigError::Invalid {
                    var: CATALOG_URL_VAR,
                    value,
                    reason: "cannot be used as a base URL".to_string(),
                });
            }
            config.catalog.catalog_url = value;
        }
        if let Some(value) = lookup(PAGE_SIZE_VAR) {
            config.page_size = parse_positive(PAGE_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(FALLBACK_LIMIT_VAR) {
            config.catalog.fallback_limit = parse_positive(FALLBACK_LIMIT_VAR, &value)?;
        }
        if let Some(value) = lookup(HTTP_TIMEOUT_VAR) {
            let secs: u64 = parse_positive(HTTP_TIMEOUT_VAR, &value)?;
            config.catalog.timeout = Duration::from_secs(secs);
        }
        if let Some(value) = lookup(USER_AGENT_VAR) {
            config.catalog.user_agent = Some(value).filter(|agent| !agent.trim().is_empty());
        }

        Ok(config)
    }
}

fn parse_positive<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + From<u8>,
    T::Err: std::fmt::Display,
{
    let parsed = value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })?;
    if parsed < T::from(1) {
        return Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(parsed)
}
