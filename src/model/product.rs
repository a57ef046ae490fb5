//! Products as shown in the catalog views.
//!
//! Products are produced by the [`catalog`](crate::catalog) module from raw wire
//! records and are immutable once fetched. The cart copies what it needs from a
//! product at insertion time (see [`CartLineItem`](crate::model::CartLineItem)).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products, assigned by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A normalized catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub thumbnail: String,
    /// Never empty once normalized; falls back to the thumbnail.
    pub images: Vec<String>,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub category: String,
    pub brand: String,
    pub stock: u32,
}

impl Product {
    /// Creates a product with the given identity and price.
    ///
    /// The remaining fields start out with the same placeholders the catalog
    /// uses for records that omit them: the thumbnail doubles as the only image,
    /// the brand is [`DEFAULT_BRAND`](crate::catalog::DEFAULT_BRAND), rating and
    /// stock are zero.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `title` - Display title
    /// * `price` - Unit price
    /// * `thumbnail` - Thumbnail URL
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Decimal,
        thumbnail: impl Into<String>,
    ) -> Self {
        let thumbnail = thumbnail.into();
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            images: vec![thumbnail.clone()],
            thumbnail,
            rating: 0.0,
            category: String::new(),
            brand: crate::catalog::DEFAULT_BRAND.to_string(),
            stock: 0,
        }
    }
}

/// A product record exactly as the remote catalog sends it.
///
/// Every field is optional here so that a single malformed record can be
/// rejected on its own instead of failing the whole page. Required fields
/// (`id`, `title`, `price`) are enforced during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: Option<ProductId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub stock: Option<u32>,
}

/// Body of `GET /products`.
///
/// Records are kept as untyped JSON so each one is decoded into a
/// [`RawProduct`] on its own; a mistyped field only costs that record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(7).to_string(), "product_7");
    }

    #[test]
    fn test_raw_product_accepts_sparse_record() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": 3,
            "title": "Powder Canister",
            "price": 14.99,
        }))
        .unwrap();

        assert_eq!(raw.id, Some(ProductId(3)));
        assert_eq!(raw.price, Some(Decimal::new(1499, 2)));
        assert!(raw.images.is_none());
        assert!(raw.brand.is_none());
    }

    #[test]
    fn test_page_without_products_key_is_empty() {
        let page: ProductsPage = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(page.products.is_empty());
    }

    #[test]
    fn test_page_keeps_mistyped_record_for_later() {
        let page: ProductsPage = serde_json::from_value(json!({ "products": [
            { "id": 1, "title": "Lip Balm", "price": 2.5 },
            { "id": 2, "title": "Toner", "price": 4.0, "stock": -1 },
        ]}))
        .unwrap();
        assert_eq!(page.products.len(), 2);
        assert!(serde_json::from_value::<RawProduct>(page.products[1].clone()).is_err());
    }
}
