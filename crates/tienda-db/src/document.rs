//! Document values and conversions.

use crate::DbError;
use serde::{de::DeserializeOwned, Serialize};

/// A flat key-value document as stored in a collection.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Collection holding product records.
pub const PRODUCTS: &str = "products";
/// Collection holding service records.
pub const SERVICES: &str = "services";
/// Collection holding destination landing records.
pub const DESTINOS: &str = "destinos";
/// Collection holding submitted orders.
pub const ORDERS: &str = "orders";
/// Collection holding user profiles.
pub const USERS: &str = "users";
/// Collection holding product categories.
pub const CATEGORIES: &str = "categories";

/// A document read back from the store, together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Identifier assigned by the store.
    pub id: String,
    /// Document fields, without the id.
    pub data: Document,
}

impl StoredDocument {
    /// Create a stored document from an id and its fields.
    pub fn new(id: impl Into<String>, data: Document) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Get a field by name.
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }

    /// Deserialize the document into a record type.
    ///
    /// The store id is injected as the `id` field so record types can carry it.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DbError> {
        let mut map = self.data.clone();
        map.insert("id".to_string(), serde_json::Value::String(self.id.clone()));
        serde_json::from_value(serde_json::Value::Object(map)).map_err(DbError::from)
    }
}

/// Serialize a record into a document, dropping any `id` field.
///
/// Ids are owned by the store and never written as document fields.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, DbError> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(mut map) => {
            map.remove("id");
            Ok(map)
        }
        other => Err(DbError::SerializeError(format!(
            "expected an object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Shallow-merge `patch` into `target`: top-level keys in the patch replace
/// the target's, keys absent from the patch are preserved.
pub fn merge(target: &mut Document, patch: Document) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        id: String,
        name: String,
        price: f64,
    }

    fn doc(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_to_document_drops_id() {
        let item = Item {
            id: "abc".to_string(),
            name: "Mate".to_string(),
            price: 12.5,
        };
        let document = to_document(&item).unwrap();
        assert!(document.get("id").is_none());
        assert_eq!(document.get("name"), Some(&json!("Mate")));
    }

    #[test]
    fn test_to_document_rejects_scalars() {
        assert!(to_document(&42).is_err());
    }

    #[test]
    fn test_deserialize_injects_id() {
        let stored = StoredDocument::new("p-1", doc(json!({"name": "Mate", "price": 3.0})));
        let item: Item = stored.deserialize().unwrap();
        assert_eq!(item.id, "p-1");
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn test_merge_preserves_untouched_fields() {
        let mut target = doc(json!({"title": "A", "subtitle": "B", "isActive": true}));
        merge(&mut target, doc(json!({"subtitle": "x"})));
        assert_eq!(target.get("title"), Some(&json!("A")));
        assert_eq!(target.get("subtitle"), Some(&json!("x")));
        assert_eq!(target.get("isActive"), Some(&json!(true)));
    }
}
