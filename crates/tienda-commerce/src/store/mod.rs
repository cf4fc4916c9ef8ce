//! Record repositories over the document store.
//!
//! A [`Repository`] owns the authoritative in-memory list for one
//! collection. Every write goes to the store first; the list only changes
//! once the store call has succeeded, so a failed call leaves it exactly as
//! it was.

mod products;
mod services;

use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tienda_db::{to_document, DocumentStore, StoredDocument};

pub use products::ProductRepository;
pub use services::ServiceRepository;

/// A record type kept in a document collection.
pub trait Record: Clone + Serialize + Send + Sync + Sized {
    /// Collection the records live in.
    const COLLECTION: &'static str;

    /// Input for creating a record.
    type Draft: Send;

    /// Partial update.
    type Patch: Serialize + Send + Sync;

    fn id(&self) -> &str;

    /// Build the record from a draft, with an unassigned id.
    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn set_id(&mut self, id: String);

    fn set_updated_at(&mut self, now: DateTime<Utc>);

    /// Merge `patch` over the record.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Reject a patch that may not be applied to this record.
    fn check_patch(&self, _patch: &Self::Patch) -> Result<(), CommerceError> {
        Ok(())
    }

    /// Decode a stored document.
    fn decode(doc: &StoredDocument) -> Result<Self, CommerceError>;
}

/// Repository over one collection.
pub struct Repository<R: Record> {
    store: Arc<dyn DocumentStore>,
    items: Vec<R>,
    loaded: bool,
}

impl<R: Record> Repository<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Current in-memory list, newest additions first.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Whether the list reflects a successful fetch.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetch every document. On failure the current list is kept.
    pub async fn load(&mut self) -> Result<&[R], CommerceError> {
        let docs = self.store.list(R::COLLECTION).await.map_err(|e| {
            tracing::warn!(collection = R::COLLECTION, error = %e, "load failed");
            CommerceError::from(e)
        })?;

        let items = docs
            .iter()
            .map(R::decode)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::warn!(collection = R::COLLECTION, error = %e, "stored document rejected");
                e
            })?;

        tracing::debug!(collection = R::COLLECTION, count = items.len(), "collection loaded");
        self.items = items;
        self.loaded = true;
        Ok(&self.items)
    }

    /// Same as [`Self::load`].
    pub async fn refresh(&mut self) -> Result<&[R], CommerceError> {
        self.load().await
    }

    /// Drop the in-memory list. The next read needs a [`Self::refresh`].
    pub fn invalidate(&mut self) {
        self.items.clear();
        self.loaded = false;
    }

    /// Persist a new record and put it at the front of the list.
    pub async fn add(&mut self, draft: R::Draft) -> Result<R, CommerceError> {
        let mut record = R::from_draft(draft, Utc::now());
        let document = to_document(&record)?;

        let id = self
            .store
            .insert(R::COLLECTION, document)
            .await
            .map_err(|e| {
                tracing::warn!(collection = R::COLLECTION, error = %e, "insert failed");
                CommerceError::from(e)
            })?;

        record.set_id(id);
        tracing::debug!(collection = R::COLLECTION, id = record.id(), "record added");
        self.items.insert(0, record.clone());
        Ok(record)
    }

    /// Persist a partial update and merge it over the in-memory entry.
    ///
    /// Fields absent from the patch keep their stored values.
    pub async fn update(&mut self, id: &str, patch: R::Patch) -> Result<R, CommerceError> {
        let index = self.position(id)?;
        self.items[index].check_patch(&patch)?;

        let now = Utc::now();
        let mut document = to_document(&patch)?;
        document.insert("updatedAt".to_string(), serde_json::to_value(now)?);

        self.store
            .update(R::COLLECTION, id, document)
            .await
            .map_err(|e| {
                tracing::warn!(collection = R::COLLECTION, id, error = %e, "update failed");
                CommerceError::from(e)
            })?;

        let record = &mut self.items[index];
        record.apply_patch(&patch);
        record.set_updated_at(now);
        tracing::debug!(collection = R::COLLECTION, id, "record updated");
        Ok(record.clone())
    }

    /// Delete a record from the store and the list.
    pub async fn remove(&mut self, id: &str) -> Result<(), CommerceError> {
        let index = self.position(id)?;

        self.store.delete(R::COLLECTION, id).await.map_err(|e| {
            tracing::warn!(collection = R::COLLECTION, id, error = %e, "delete failed");
            CommerceError::from(e)
        })?;

        self.items.remove(index);
        tracing::debug!(collection = R::COLLECTION, id, "record removed");
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize, CommerceError> {
        self.items
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CommerceError::NotFound {
                collection: R::COLLECTION.to_string(),
                id: id.to_string(),
            })
    }
}

impl<R: Record> fmt::Debug for Repository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("collection", &R::COLLECTION)
            .field("items", &self.items.len())
            .field("loaded", &self.loaded)
            .finish()
    }
}
