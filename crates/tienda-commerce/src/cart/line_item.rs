//! Cart line items and derived totals.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Upper bound on one line's quantity when reading a stored cart.
pub const MAX_LINE_QUANTITY: u32 = 10_000;

/// One product in the cart.
///
/// Carries the product fields needed to render the cart without another
/// lookup. Only `quantity` is ever changed in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID.
    pub id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    /// Units in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item for `product`.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            category: product.category.clone(),
            quantity,
        }
    }

    /// Price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Derived cart figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of price times quantity.
    pub total: f64,
    /// Sum of quantities, saturating at `u32::MAX`.
    pub count: u32,
}

impl CartTotals {
    pub fn from_items(items: &[LineItem]) -> Self {
        Self {
            total: items.iter().map(LineItem::subtotal).sum(),
            count: items.iter().fold(0u32, |n, i| n.saturating_add(i.quantity)),
        }
    }
}
