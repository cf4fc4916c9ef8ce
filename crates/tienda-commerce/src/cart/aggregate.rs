//! Cart state bound to the active identity.

use super::line_item::{CartTotals, LineItem, MAX_LINE_QUANTITY};
use super::notice::{CartNotice, Notifier};
use crate::catalog::{check_stock, Product, StockCheck, StockLookup};
use crate::config::CartSettings;
use crate::ids::{ProductId, UserId};
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tienda_cache::{cache_key, Cache};

/// The shopper's cart.
///
/// Every mutation goes through [`CartAggregate::commit`], which recomputes
/// the totals and writes the items to the cache under the active key.
/// Stock is always checked against the live product, never a cached copy.
pub struct CartAggregate {
    cache: Cache,
    stock: Arc<dyn StockLookup>,
    notifier: Arc<dyn Notifier>,
    guest_key: String,
    user: Option<UserId>,
    items: Vec<LineItem>,
    totals: CartTotals,
}

impl CartAggregate {
    /// Empty guest cart. Call [`Self::load_cart`] to pick up a stored one.
    pub fn new(cache: Cache, stock: Arc<dyn StockLookup>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_settings(cache, stock, notifier, &CartSettings::default())
    }

    pub fn with_settings(
        cache: Cache,
        stock: Arc<dyn StockLookup>,
        notifier: Arc<dyn Notifier>,
        settings: &CartSettings,
    ) -> Self {
        Self {
            cache,
            stock,
            notifier,
            guest_key: settings.guest_key.clone(),
            user: None,
            items: Vec::new(),
            totals: CartTotals::default(),
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == *id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price times quantity.
    pub fn cart_total(&self) -> f64 {
        self.totals.total
    }

    /// Sum of quantities.
    pub fn cart_count(&self) -> u32 {
        self.totals.count
    }

    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// `cart:<userId>` when signed in, the guest key otherwise.
    pub fn storage_key(&self) -> String {
        match &self.user {
            Some(user) => cache_key!("cart", user),
            None => self.guest_key.clone(),
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Returns `false` when the request was rejected; the reason is sent to
    /// the notifier.
    pub async fn add_to_cart(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            self.notifier.notify(CartNotice::InvalidQuantity);
            return false;
        }

        let existing = self.item(&product.id).map(|i| i.quantity).unwrap_or(0);
        let requested = existing.saturating_add(quantity);
        let name = product.name.clone();

        match check_stock(self.stock.as_ref(), &product.id, requested).await {
            StockCheck::Available { .. } => {}
            StockCheck::OutOfStock | StockCheck::NotFound => {
                self.notifier.notify(CartNotice::OutOfStock { name });
                return false;
            }
            StockCheck::Insufficient { available } => {
                self.notifier
                    .notify(CartNotice::InsufficientStock { name, available });
                return false;
            }
            StockCheck::Unverified(_) => {
                self.notifier.notify(CartNotice::StockCheckFailed { name });
                return false;
            }
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.id == product.id) {
            Some(line) => {
                line.quantity = requested;
                self.notifier.notify(CartNotice::QuantityIncreased {
                    name,
                    quantity: requested,
                });
            }
            None => {
                items.push(LineItem::from_product(product, quantity));
                self.notifier.notify(CartNotice::Added { name });
            }
        }
        self.commit(items);
        true
    }

    /// Remove the line for `id`. Returns whether it was present.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let Some(position) = self.items.iter().position(|i| i.id == *id) else {
            return false;
        };
        let mut items = self.items.clone();
        let removed = items.remove(position);
        self.commit(items);
        self.notifier.notify(CartNotice::Removed { name: removed.name });
        true
    }

    /// Set the quantity for `id` after revalidating stock.
    ///
    /// Zero removes the line. Unknown ids are ignored. Returns whether the
    /// cart changed.
    pub async fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        let Some(name) = self.item(id).map(|i| i.name.clone()) else {
            return false;
        };
        if quantity == 0 {
            return self.remove_from_cart(id);
        }

        let check = check_stock(self.stock.as_ref(), id, quantity).await;
        let mut items = self.items.clone();
        match check {
            StockCheck::Available { .. } => {
                set_quantity(&mut items, id, quantity);
                self.notifier
                    .notify(CartNotice::QuantityUpdated { name, quantity });
            }
            StockCheck::OutOfStock | StockCheck::NotFound => {
                items.retain(|i| i.id != *id);
                self.notifier.notify(CartNotice::Dropped { name });
            }
            StockCheck::Insufficient { available } => {
                set_quantity(&mut items, id, available);
                self.notifier.notify(CartNotice::Clamped { name, available });
            }
            StockCheck::Unverified(_) => {
                self.notifier.notify(CartNotice::StockCheckFailed { name });
                return false;
            }
        }
        self.commit(items);
        true
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.commit(Vec::new());
        self.notifier.notify(CartNotice::Cleared);
    }

    /// Replace the in-memory cart with the stored one for the active key,
    /// revalidated against live stock.
    ///
    /// Lines for the same product are merged first. Sold-out or deleted
    /// products are dropped and under-stocked lines are clamped. A line whose
    /// lookup fails is kept, capped at [`MAX_LINE_QUANTITY`].
    pub async fn load_cart(&mut self) {
        let key = self.storage_key();
        let stored: Vec<LineItem> = match self.cache.get::<Vec<LineItem>>(&key) {
            Ok(Some(items)) => merge_lines(items),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "unreadable cart, starting empty");
                Vec::new()
            }
        };

        let stock = Arc::clone(&self.stock);
        let checks = join_all(
            stored
                .iter()
                .map(|item| check_stock(stock.as_ref(), &item.id, item.quantity)),
        )
        .await;

        let mut items = Vec::with_capacity(stored.len());
        for (mut item, check) in stored.into_iter().zip(checks) {
            match check {
                StockCheck::Available { .. } | StockCheck::Unverified(_) => items.push(item),
                StockCheck::OutOfStock | StockCheck::NotFound => {
                    self.notifier.notify(CartNotice::Dropped { name: item.name });
                }
                StockCheck::Insufficient { available } => {
                    item.quantity = available;
                    self.notifier.notify(CartNotice::Clamped {
                        name: item.name.clone(),
                        available,
                    });
                    items.push(item);
                }
            }
        }

        self.commit(items);
    }

    /// Switch identity and load that identity's cart.
    ///
    /// The previous cart stays stored under its own key; carts are never
    /// merged.
    pub async fn set_user(&mut self, user: Option<UserId>) {
        let previous = self.storage_key();
        self.user = user;
        let key = self.storage_key();
        tracing::info!(from = %previous, to = %key, "cart identity switched");
        self.load_cart().await;
    }

    fn commit(&mut self, items: Vec<LineItem>) {
        self.totals = CartTotals::from_items(&items);
        self.items = items;

        let key = self.storage_key();
        if let Err(e) = self.cache.set(&key, &self.items) {
            tracing::warn!(key = %key, error = %e, "failed to persist cart");
        }
    }
}

/// Sum duplicate lines into the first one, drop empty lines and cap the
/// rest.
fn merge_lines(stored: Vec<LineItem>) -> Vec<LineItem> {
    let mut merged: Vec<LineItem> = Vec::with_capacity(stored.len());
    for item in stored {
        match merged.iter_mut().find(|m| m.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => merged.push(item),
        }
    }
    merged.retain(|line| line.quantity > 0);
    for line in &mut merged {
        line.quantity = line.quantity.min(MAX_LINE_QUANTITY);
    }
    merged
}

fn set_quantity(items: &mut [LineItem], id: &ProductId, quantity: u32) {
    if let Some(line) = items.iter_mut().find(|i| i.id == *id) {
        line.quantity = quantity;
    }
}

impl fmt::Debug for CartAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartAggregate")
            .field("key", &self.storage_key())
            .field("items", &self.items)
            .field("totals", &self.totals)
            .finish_non_exhaustive()
    }
}
