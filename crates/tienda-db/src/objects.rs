//! Object storage seam for uploaded images.

use crate::store::generate_document_id;
use crate::DbError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Default upload cap: 5 MB per image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted MIME prefix for uploads.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// A blob to upload.
#[derive(Debug, Clone)]
pub struct ObjectUpload {
    /// Original file name, kept as the path suffix.
    pub file_name: String,
    /// MIME type reported by the client.
    pub content_type: String,
    /// Raw bytes.
    pub bytes: Vec<u8>,
}

/// Location of an uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    /// Public URL for rendering.
    pub url: String,
    /// Storage path, needed for deletion.
    pub path: String,
}

/// Limits applied before an upload is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    /// Maximum blob size in bytes.
    pub max_bytes: usize,
    /// Required MIME prefix.
    pub mime_prefix: String,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: MAX_IMAGE_BYTES,
            mime_prefix: IMAGE_MIME_PREFIX.to_string(),
        }
    }
}

/// Check an upload against the limits without touching the store.
pub fn validate_image(upload: &ObjectUpload, limits: &UploadLimits) -> Result<(), DbError> {
    if !upload.content_type.starts_with(&limits.mime_prefix) {
        return Err(DbError::UnsupportedContentType(upload.content_type.clone()));
    }
    if upload.bytes.len() > limits.max_bytes {
        return Err(DbError::ObjectTooLarge {
            size: upload.bytes.len(),
            limit: limits.max_bytes,
        });
    }
    Ok(())
}

/// Hosted object storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload a blob under a logical folder.
    async fn upload(&self, upload: ObjectUpload, folder: &str) -> Result<UploadedObject, DbError>;

    /// Delete an object by its storage path.
    async fn delete(&self, path: &str) -> Result<(), DbError>;
}

/// In-memory object storage for development and tests.
#[derive(Debug)]
pub struct MemoryObjectStore {
    base_url: String,
    limits: UploadLimits,
    objects: RwLock<HashMap<String, ObjectUpload>>,
}

impl MemoryObjectStore {
    /// Create a store serving objects under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            limits: UploadLimits::default(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Override the upload limits.
    pub fn with_limits(mut self, limits: UploadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Check whether an object exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.objects
            .read()
            .map(|o| o.contains_key(path))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, upload: ObjectUpload, folder: &str) -> Result<UploadedObject, DbError> {
        validate_image(&upload, &self.limits)?;

        let path = format!(
            "{}/{}_{}",
            folder.trim_matches('/'),
            generate_document_id(),
            upload.file_name
        );
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        self.objects
            .write()
            .map_err(|_| DbError::Unavailable("object store lock poisoned".to_string()))?
            .insert(path.clone(), upload);

        Ok(UploadedObject { url, path })
    }

    async fn delete(&self, path: &str) -> Result<(), DbError> {
        let removed = self
            .objects
            .write()
            .map_err(|_| DbError::Unavailable("object store lock poisoned".to_string()))?
            .remove(path);
        match removed {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound {
                collection: "objects".to_string(),
                id: path.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> ObjectUpload {
        ObjectUpload {
            file_name: "foto.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn test_validate_rejects_non_images() {
        let mut upload = png(10);
        upload.content_type = "application/pdf".to_string();
        assert!(matches!(
            validate_image(&upload, &UploadLimits::default()),
            Err(DbError::UnsupportedContentType(_))
        ));
    }

    #[test]
    fn test_validate_size_cap() {
        let limits = UploadLimits::default();
        assert!(validate_image(&png(MAX_IMAGE_BYTES), &limits).is_ok());
        assert!(matches!(
            validate_image(&png(MAX_IMAGE_BYTES + 1), &limits),
            Err(DbError::ObjectTooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn test_upload_and_delete() {
        let store = MemoryObjectStore::new("https://cdn.example.com/");
        let uploaded = store.upload(png(16), "/services/").await.unwrap();

        assert!(uploaded.path.starts_with("services/"));
        assert!(uploaded.path.ends_with("_foto.png"));
        assert_eq!(
            uploaded.url,
            format!("https://cdn.example.com/{}", uploaded.path)
        );
        assert!(store.contains(&uploaded.path));

        store.delete(&uploaded.path).await.unwrap();
        assert!(!store.contains(&uploaded.path));
        assert!(store.delete(&uploaded.path).await.is_err());
    }
}
