//! Key-Value store wrapper with automatic serialization.

use crate::backend::{KvBackend, MemoryBackend};
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;

/// Type-safe local storage.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap; clones share the
/// same backend.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn KvBackend>,
}

impl Cache {
    /// Wrap an existing backend.
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Open a process-local store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::in_memory();
    /// ```
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// value does not parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<LineItem>> = cache.get("cart:user123")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Get a value, falling back to `T::default()` on a missing key or any
    /// read/parse failure.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable local value");
                T::default()
            }
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cart:user123", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// Write a raw string without serialization.
    pub fn set_raw(&self, key: &str, raw: &str) -> Result<(), CacheError> {
        self.backend.set(key, raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.backend.get(key)?.is_some())
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.backend.keys()
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = cache_key!("cart", user_id);
/// // Returns "cart:user123"
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
    struct Line {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::in_memory();
        let lines = vec![Line {
            id: "p1".to_string(),
            quantity: 2,
        }];
        cache.set("cart:guest", &lines).unwrap();

        let loaded: Vec<Line> = cache.get("cart:guest").unwrap().unwrap();
        assert_eq!(loaded, lines);
        assert!(cache.exists("cart:guest").unwrap());
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let cache = Cache::in_memory();
        cache.set_raw("cart:guest", "{not json").unwrap();

        let result: Result<Option<Vec<Line>>, _> = cache.get("cart:guest");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));

        let fallback: Vec<Line> = cache.get_or_default("cart:guest");
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_clones_share_backend() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("language", "en").unwrap();
        assert_eq!(other.get::<String>("language").unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("cart", "user123"), "cart:user123");
        assert_eq!(cache_key!("a", 1, "b"), "a:1:b");
    }
}
