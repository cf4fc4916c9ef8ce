//! Document store and object storage seams for Tienda.
//!
//! The storefront persists everything in a hosted document database and keeps
//! images in hosted object storage. This crate models both as async traits
//! with in-memory implementations for development and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_db::{DocumentStore, MemoryStore, PRODUCTS};
//!
//! let store = MemoryStore::new();
//! let id = store.insert(PRODUCTS, document).await?;
//! let stored = store.get(PRODUCTS, &id).await?;
//! ```

mod document;
mod error;
mod objects;
mod store;

pub use document::{
    merge, to_document, Document, StoredDocument, CATEGORIES, DESTINOS, ORDERS, PRODUCTS,
    SERVICES, USERS,
};
pub use error::DbError;
pub use objects::{
    validate_image, MemoryObjectStore, ObjectStore, ObjectUpload, UploadLimits, UploadedObject,
    IMAGE_MIME_PREFIX, MAX_IMAGE_BYTES,
};
pub use store::{generate_document_id, DocumentStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{DbError, Document, DocumentStore, MemoryStore, ObjectStore, StoredDocument};
}
