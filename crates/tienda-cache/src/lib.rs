//! Local key-value storage for Tienda.
//!
//! Holds the client-local state of the storefront: the per-identity cart,
//! the language preference, recent searches and favourite products. All of
//! it is best-effort cache, never the system of record.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_cache::{cache_key, Cache};
//!
//! let cache = Cache::in_memory();
//!
//! // Store a value
//! cache.set(&cache_key!("cart", "user123"), &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<LineItem>> = cache.get("cart:user123")?;
//! ```

mod backend;
mod error;
mod kv;
mod prefs;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;
pub use prefs::{
    Language, Preferences, FAVORITES_KEY, LANGUAGE_KEY, MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{cache_key, Cache, CacheError, Language, Preferences};
}
