//! The shopping cart aggregate.
//!
//! [`Cart`] is a plain synchronous state container: an insertion-ordered list of
//! [`CartLineItem`]s with at most one entry per [`ProductId`]. It performs no I/O
//! and has no failure modes; out-of-range input is normalized rather than
//! rejected (a non-positive quantity update removes the line).
//!
//! Within the running application the cart is owned by the cart service task
//! (see [`cart_actor`](crate::cart_actor)) and reached through a
//! [`CartClient`](crate::clients::CartClient).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// Lowest quantity the product-details selector offers.
pub const MIN_SELECTABLE_QUANTITY: u32 = 1;

/// Highest quantity the product-details selector offers.
pub const MAX_SELECTABLE_QUANTITY: u32 = 10;

/// Clamps a requested selector quantity into
/// `MIN_SELECTABLE_QUANTITY..=MAX_SELECTABLE_QUANTITY`.
///
/// The cart itself does not bound quantities; callers that let a user pick a
/// quantity run it through here before calling [`Cart::add_to_cart`].
pub fn clamp_quantity(requested: i64) -> u32 {
    let clamped = requested.clamp(
        i64::from(MIN_SELECTABLE_QUANTITY),
        i64::from(MAX_SELECTABLE_QUANTITY),
    );
    // In range by construction.
    u32::try_from(clamped).unwrap_or(MIN_SELECTABLE_QUANTITY)
}

/// One product's entry in the cart.
///
/// Title, price and thumbnail are copied from the [`Product`] when the line is
/// created; later catalog price changes are not re-synced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLineItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            quantity,
        }
    }

    /// Price times quantity for this line.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Snapshot of a cart with its derived totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub total_items: u64,
    pub total_price: Decimal,
}

/// Insertion-ordered collection of line items, unique by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`.
    ///
    /// If the product already has a line its quantity is incremented (no upper
    /// bound); otherwise a new line is appended. Returns the line's resulting
    /// quantity. Adding zero units changes nothing.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> u32 {
        if let Some(item) = self.get_mut(product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return item.quantity;
        }
        if quantity == 0 {
            return 0;
        }
        self.items.push(CartLineItem::from_product(product, quantity));
        quantity
    }

    /// Removes the line for `product_id`, returning it if it was present.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Option<CartLineItem> {
        let index = self.items.iter().position(|item| item.id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Sets the quantity of the line for `product_id` to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line. Absent lines are left
    /// alone. Returns the resulting quantity (0 when there is no line).
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> u32 {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return 0;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.get_mut(product_id) {
            Some(item) => {
                item.quantity = quantity;
                quantity
            }
            None => 0,
        }
    }

    /// Adds one unit to an existing line.
    pub fn increment(&mut self, product_id: ProductId) -> u32 {
        match self.get_mut(product_id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => 0,
        }
    }

    /// Takes one unit off an existing line, stopping at 1.
    ///
    /// Removing a line is always an explicit [`Cart::remove_from_cart`].
    pub fn decrement(&mut self, product_id: ProductId) -> u32 {
        match self.get_mut(product_id) {
            Some(item) => {
                if item.quantity > MIN_SELECTABLE_QUANTITY {
                    item.quantity -= 1;
                }
                item.quantity
            }
            None => 0,
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all lines; zero for an empty cart.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Quantity of the line for `product_id`, or 0.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |item| item.quantity)
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    fn get_mut(&mut self, product_id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id == product_id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }
}
