//! Document store error types.

use thiserror::Error;

/// Errors that can occur when talking to the document store or object storage.
#[derive(Error, Debug)]
pub enum DbError {
    /// The backing service could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected a write.
    #[error("Write rejected: {0}")]
    WriteRejected(String),

    /// No document with the given id exists in the collection.
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Failed to (de)serialize a document.
    #[error("Serialization error: {0}")]
    SerializeError(String),

    /// Upload rejected because the blob is larger than allowed.
    #[error("Object too large: {size} bytes exceeds limit of {limit} bytes")]
    ObjectTooLarge { size: usize, limit: usize },

    /// Upload rejected because of its content type.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::SerializeError(e.to_string())
    }
}
