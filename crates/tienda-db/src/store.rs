//! Document store seam and the in-memory implementation.

use crate::document::{merge, Document, StoredDocument};
use crate::DbError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// A hosted document database, seen as named collections of flat documents.
///
/// No collection owns referential integrity; cross-collection references are
/// resolved by explicit lookups.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document of a collection.
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, DbError>;

    /// Fetch a single document, `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<StoredDocument>, DbError>;

    /// Insert a new document and return the id assigned by the store.
    async fn insert(&self, collection: &str, data: Document) -> Result<String, DbError>;

    /// Shallow-merge `patch` into an existing document.
    async fn update(&self, collection: &str, id: &str, patch: Document) -> Result<(), DbError>;

    /// Delete a document.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), DbError>;
}

/// In-memory document store for development and tests.
///
/// Documents keep insertion order inside a collection. The store can be taken
/// offline to simulate an unreachable backend.
#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
    available: AtomicBool,
}

impl MemoryStore {
    /// Create an empty, reachable store.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle reachability. While offline every call fails with
    /// [`DbError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Put a document with a caller-chosen id, replacing any previous one.
    pub fn seed(&self, collection: &str, id: &str, data: Document) -> Result<(), DbError> {
        let mut collections = self.write()?;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|d| d.id == id) {
            Some(existing) => existing.data = data,
            None => docs.push(StoredDocument::new(id, data)),
        }
        Ok(())
    }

    /// Number of documents in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn ensure_available(&self) -> Result<(), DbError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DbError::Unavailable("document store is offline".to_string()))
        }
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Vec<StoredDocument>>>, DbError>
    {
        self.collections
            .read()
            .map_err(|_| DbError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<StoredDocument>>>, DbError>
    {
        self.collections
            .write()
            .map_err(|_| DbError::Unavailable("store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, DbError> {
        self.ensure_available()?;
        Ok(self.read()?.get(collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<StoredDocument>, DbError> {
        self.ensure_available()?;
        Ok(self
            .read()?
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn insert(&self, collection: &str, data: Document) -> Result<String, DbError> {
        self.ensure_available()?;
        let id = generate_document_id();
        self.write()?
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument::new(id.clone(), data));
        tracing::trace!(collection, id = %id, "document inserted");
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, patch: Document) -> Result<(), DbError> {
        self.ensure_available()?;
        let mut collections = self.write()?;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| DbError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        merge(&mut doc.data, patch);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DbError> {
        self.ensure_available()?;
        let mut collections = self.write()?;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| DbError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let len_before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == len_before {
            return Err(DbError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

/// Generate a 20-character URL-safe document id.
pub fn generate_document_id() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 15] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}
