//! Error types for catalog fetches.

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur while fetching from the remote catalog.
///
/// Every failure of [`CatalogService`](crate::catalog::CatalogService) is folded
/// into this one type and returned to the caller; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the response body could not be read.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The body was not the JSON shape the catalog is expected to send.
    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A single-product response was missing required data or described
    /// another product.
    #[error("invalid product record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// The configured catalog URL cannot carry a path.
    #[error("cannot build catalog URL from {0}")]
    Url(String),
}

impl FetchError {
    /// Returns true when the catalog reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Why a raw record was rejected during normalization.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("negative price {0}")]
    NegativePrice(rust_decimal::Decimal),

    #[error("requested {requested} but received {received}")]
    IdMismatch {
        requested: ProductId,
        received: ProductId,
    },
}
