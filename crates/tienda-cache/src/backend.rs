//! Raw string storage backends.

use crate::CacheError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Client-local string key-value storage.
///
/// Values are opaque strings; [`crate::Cache`] layers JSON on top.
pub trait KvBackend: Send + Sync {
    /// Read a raw value.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    /// Write a raw value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    /// Remove a key. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;
    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// Process-local backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CacheError::StoreError("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .write()
            .map_err(|_| CacheError::StoreError("lock poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries
            .write()
            .map_err(|_| CacheError::StoreError("lock poisoned".to_string()))?
            .remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CacheError::StoreError("lock poisoned".to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Backend storing one file per key inside a directory.
///
/// File names are the URL-safe base64 of the key, so any key is allowed.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (and create if needed) a storage directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        self.dir
            .join(format!("{}.json", URL_SAFE_NO_PAD.encode(key.as_bytes())))
    }

    fn key_for(file_name: &str) -> Option<String> {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let stem = file_name.strip_suffix(".json")?;
        let bytes = URL_SAFE_NO_PAD.decode(stem).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if let Some(key) = entry.file_name().to_str().and_then(Self::key_for) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
