//! Live stock checks.
//!
//! Stock is always read from the document store at the moment of the check.
//! Nothing here is cached.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::CommerceError;
use async_trait::async_trait;
use std::sync::Arc;
use tienda_db::{DocumentStore, PRODUCTS};

/// Outcome of checking a requested quantity against live stock.
///
/// A conflict is a value the caller decides on (reject, clamp or remove),
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockCheck {
    /// Enough units for the request.
    Available { stock: u32 },
    /// The product exists but has no units.
    OutOfStock,
    /// Some units, but fewer than requested.
    Insufficient { available: u32 },
    /// The product no longer exists.
    NotFound,
    /// The lookup itself failed.
    Unverified(String),
}

impl StockCheck {
    /// Classify a requested quantity against a known stock level.
    pub fn evaluate(stock: u32, requested: u32) -> Self {
        if stock == 0 {
            StockCheck::OutOfStock
        } else if requested > stock {
            StockCheck::Insufficient { available: stock }
        } else {
            StockCheck::Available { stock }
        }
    }

    /// Whether the requested quantity can be honoured as is.
    pub fn is_valid(&self) -> bool {
        matches!(self, StockCheck::Available { .. })
    }

    /// Units known to be available, if the lookup succeeded.
    pub fn available_stock(&self) -> Option<u32> {
        match self {
            StockCheck::Available { stock } => Some(*stock),
            StockCheck::Insufficient { available } => Some(*available),
            StockCheck::OutOfStock | StockCheck::NotFound => Some(0),
            StockCheck::Unverified(_) => None,
        }
    }
}

/// Source of current product state.
#[async_trait]
pub trait StockLookup: Send + Sync {
    /// Fetch the product as it is right now, or `None` if it was deleted.
    async fn live_product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError>;
}

/// Stock lookup that reads the `products` collection on every call.
#[derive(Clone)]
pub struct LiveStock {
    store: Arc<dyn DocumentStore>,
}

impl LiveStock {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StockLookup for LiveStock {
    async fn live_product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError> {
        match self.store.get(PRODUCTS, id.as_str()).await? {
            Some(doc) => Ok(Some(doc.deserialize()?)),
            None => Ok(None),
        }
    }
}

/// Check `requested` units of `id` against live stock.
pub async fn check_stock(lookup: &dyn StockLookup, id: &ProductId, requested: u32) -> StockCheck {
    match lookup.live_product(id).await {
        Ok(Some(product)) => StockCheck::evaluate(product.stock, requested),
        Ok(None) => StockCheck::NotFound,
        Err(e) => {
            tracing::warn!(product_id = %id, error = %e, "stock lookup failed");
            StockCheck::Unverified(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use chrono::Utc;
    use tienda_db::{to_document, MemoryStore};

    async fn store_with(stock: u32) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let product = NewProduct::new("Mate", "Bebidas", 3.0)
            .with_stock(stock)
            .into_product(ProductId::new("p1"), Utc::now());
        store
            .seed(PRODUCTS, "p1", to_document(&product).unwrap())
            .unwrap();
        store
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(StockCheck::evaluate(0, 1), StockCheck::OutOfStock);
        assert_eq!(StockCheck::evaluate(2, 3), StockCheck::Insufficient { available: 2 });
        assert_eq!(StockCheck::evaluate(3, 3), StockCheck::Available { stock: 3 });
        assert!(StockCheck::evaluate(3, 3).is_valid());
        assert_eq!(StockCheck::OutOfStock.available_stock(), Some(0));
        assert_eq!(StockCheck::Unverified("x".into()).available_stock(), None);
    }

    #[tokio::test]
    async fn test_live_lookup_reads_store() {
        let store = store_with(2).await;
        let lookup = LiveStock::new(store.clone());

        let check = check_stock(&lookup, &ProductId::new("p1"), 5).await;
        assert_eq!(check, StockCheck::Insufficient { available: 2 });

        let check = check_stock(&lookup, &ProductId::new("missing"), 1).await;
        assert_eq!(check, StockCheck::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_unverified() {
        let store = store_with(2).await;
        store.set_available(false);
        let lookup = LiveStock::new(store);

        let check = check_stock(&lookup, &ProductId::new("p1"), 1).await;
        assert!(matches!(check, StockCheck::Unverified(_)));
    }
}
