//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Stock conflicts are not errors; see [`crate::catalog::StockCheck`].
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A record was not found in its collection.
    #[error("Record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// A required field is missing or a form is otherwise invalid.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Attempt to change the type of an existing service.
    #[error("Service type is fixed at creation: stored {stored}, requested {requested}")]
    ServiceTypeChange { stored: String, requested: String },

    /// A stored service's content does not have the shape of its type.
    #[error("Content does not match service type {service_type}: {reason}")]
    InvalidContent {
        service_type: String,
        reason: String,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Database error.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<tienda_db::DbError> for CommerceError {
    fn from(e: tienda_db::DbError) -> Self {
        match e {
            tienda_db::DbError::NotFound { collection, id } => {
                CommerceError::NotFound { collection, id }
            }
            other => CommerceError::DatabaseError(other.to_string()),
        }
    }
}

impl From<tienda_cache::CacheError> for CommerceError {
    fn from(e: tienda_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_keeps_location() {
        let err: CommerceError = tienda_db::DbError::NotFound {
            collection: "services".to_string(),
            id: "s1".to_string(),
        }
        .into();
        assert!(matches!(err, CommerceError::NotFound { ref id, .. } if id == "s1"));
    }

    #[test]
    fn test_db_other_errors_wrap() {
        let err: CommerceError = tienda_db::DbError::Unavailable("offline".to_string()).into();
        assert!(matches!(err, CommerceError::DatabaseError(_)));
        assert!(err.to_string().contains("offline"));
    }
}
