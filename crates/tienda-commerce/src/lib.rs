//! Storefront domain types and logic for Tienda.
//!
//! - **Catalog**: Products, forms, filtering, live stock checks
//! - **Services**: Per-type service content and the panel editors for it
//! - **Store**: Repositories over the remote document store
//! - **Search**: Accent-insensitive fuzzy product search
//! - **Cart**: Stock-validated cart persisted in local storage
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_commerce::prelude::*;
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//!
//! let mut index = SearchIndex::new(SearchSettings::default());
//! index.load_products(store.as_ref()).await?;
//! let hits = index.search("cafe", 10);
//!
//! let mut cart = CartAggregate::new(
//!     Cache::in_memory(),
//!     Arc::new(LiveStock::new(store.clone())),
//!     Arc::new(TracingNotifier::default()),
//! );
//! cart.add_to_cart(&hits[0].product, 1).await;
//! println!("Total: {:.2}", cart.cart_total());
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod services;
pub mod store;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{SearchSettings, StorefrontConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        CatalogFilter, Filter, LiveStock, NewProduct, Product, ProductForm, ProductPatch,
        ProductStatus, SortOption, StockCheck, StockLookup,
    };

    // Services
    pub use crate::services::{
        initial_content, initial_structure, NewService, Service, ServiceContent, ServiceForm,
        ServicePatch, ServiceType,
    };

    // Repositories
    pub use crate::store::{ProductRepository, ServiceRepository};

    // Search
    pub use crate::search::{SearchHit, SearchIndex, Suggestion};

    // Cart
    pub use crate::cart::{CartAggregate, CartNotice, LineItem, Notifier, TracingNotifier};

    pub use tienda_cache::{Cache, Language, Preferences};
    pub use tienda_db::{DocumentStore, MemoryStore, ObjectStore};
}
