//! Turning raw catalog records into [`Product`]s.
//!
//! Required fields (`id`, `title`, `price`) must be present. Optional fields are
//! filled in as follows:
//!
//! | field    | default                                   |
//! |----------|-------------------------------------------|
//! | `images` | `[thumbnail]` (also when the list is empty) |
//! | `rating` | a value in `[4.0, 5.0)`                   |
//! | `brand`  | [`DEFAULT_BRAND`]                         |
//! | `stock`  | an integer in `[10, 59]`                  |
//!
//! Placeholder rating and stock are drawn from a generator seeded with the
//! product id, so the same record always normalizes to the same product.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::catalog::RecordError;
use crate::model::{Product, ProductId, RawProduct};

/// Brand shown for products whose record carries none.
pub const DEFAULT_BRAND: &str = "Premium Beauty";

/// Placeholder ratings fall in `[4.0, 5.0)`.
const DEFAULT_RATING_RANGE: std::ops::Range<f64> = 4.0..5.0;

/// Placeholder stock falls in `[10, 59]`.
const DEFAULT_STOCK_RANGE: std::ops::RangeInclusive<u32> = 10..=59;

/// Placeholder values for a product whose record omits rating or stock.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placeholders {
    rating: f64,
    stock: u32,
}

impl Placeholders {
    fn for_product(id: ProductId) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::from(id.0));
        // Always draw both, in this order, so each value depends only on the id.
        let rating = rng.gen_range(DEFAULT_RATING_RANGE);
        let stock = rng.gen_range(DEFAULT_STOCK_RANGE);
        Self { rating, stock }
    }
}

/// Normalizes one raw record.
pub fn normalize(raw: RawProduct) -> Result<Product, RecordError> {
    let id = raw.id.ok_or(RecordError::MissingField("id"))?;
    let title = raw.title.ok_or(RecordError::MissingField("title"))?;
    let price = raw.price.ok_or(RecordError::MissingField("price"))?;
    if price < Decimal::ZERO {
        return Err(RecordError::NegativePrice(price));
    }

    let thumbnail = raw.thumbnail.unwrap_or_default();
    let images = match raw.images {
        Some(images) if !images.is_empty() => images,
        _ => vec![thumbnail.clone()],
    };
    let placeholders = Placeholders::for_product(id);

    Ok(Product {
        id,
        title,
        description: raw.description.unwrap_or_default(),
        price,
        thumbnail,
        images,
        rating: raw.rating.unwrap_or(placeholders.rating).clamp(0.0, 5.0),
        category: raw.category.unwrap_or_default(),
        brand: raw.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        stock: raw.stock.unwrap_or(placeholders.stock),
    })
}
