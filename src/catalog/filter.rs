//! The beauty keyword filter.
//!
//! The remote catalog is a general-purpose store; this view only shows products
//! that look like cosmetics. A product matches when any keyword occurs,
//! case-insensitively, in its title, description or category, or when its
//! category names one of the beauty departments.

use serde_json::Value;

use crate::model::Product;

/// Substrings that mark a product as belonging in the cosmetics view.
pub const BEAUTY_KEYWORDS: &[&str] = &[
    "beauty",
    "makeup",
    "cosmetic",
    "lipstick",
    "foundation",
    "mascara",
    "eyeshadow",
    "blush",
    "concealer",
    "powder",
    "cream",
    "serum",
    "lotion",
    "moisturizer",
    "cleanser",
    "toner",
    "perfume",
    "fragrance",
    "nail",
    "polish",
    "skin",
    "face",
    "eye",
    "lip",
    "glow",
];

/// Category substrings that admit a product regardless of its text.
pub const BEAUTY_CATEGORIES: &[&str] = &["beauty", "skin", "fragrance"];

/// Returns true when `product` belongs in the cosmetics view.
pub fn is_beauty_product(product: &Product) -> bool {
    matches_beauty_text(&product.title, &product.description, &product.category)
}

/// Best-effort beauty check on a record that could not be turned into a
/// [`Product`]. Missing or non-string fields count as empty.
pub fn is_beauty_record(record: &Value) -> bool {
    matches_beauty_text(
        text_field(record, "title"),
        text_field(record, "description"),
        text_field(record, "category"),
    )
}

fn text_field<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or_default()
}

fn matches_beauty_text(title: &str, description: &str, category: &str) -> bool {
    let category = category.to_lowercase();
    if BEAUTY_CATEGORIES.iter().any(|c| category.contains(c)) {
        return true;
    }

    let title = title.to_lowercase();
    let description = description.to_lowercase();
    BEAUTY_KEYWORDS.iter().any(|keyword| {
        title.contains(keyword) || description.contains(keyword) || category.contains(keyword)
    })
}
