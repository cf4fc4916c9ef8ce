//! Storefront configuration.
//!
//! Every section has defaults, so an empty file (or no file) yields the
//! stock behaviour. Files ending in `.json` are read as JSON, anything else
//! as TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tienda_cache::{Cache, Language, Preferences, MAX_RECENT_SEARCHES};
use tienda_db::{UploadLimits, IMAGE_MIME_PREFIX, MAX_IMAGE_BYTES};
use tienda_observability::LogSettings;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub search: SearchSettings,
    pub cart: CartSettings,
    pub uploads: UploadSettings,
    pub preferences: PreferenceSettings,
    pub logging: LogSettings,
}

impl StorefrontConfig {
    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Install the global subscriber described by `[logging]`.
    pub fn init_logging(&self) -> Result<()> {
        tienda_observability::init_logging(&self.logging).context("Failed to initialise logging")
    }
}

/// Per-field weights for fuzzy search. Independent importance scores;
/// they do not need to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub description: f64,
    pub category: f64,
    pub tags: f64,
    pub brand: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 0.7,
            description: 0.2,
            category: 0.1,
            tags: 0.3,
            brand: 0.4,
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub weights: FieldWeights,
    /// A field matches when errors / pattern length is at most this.
    pub threshold: f64,
    /// Queries shorter than this (after trimming) return nothing.
    pub min_query_len: usize,
    pub default_limit: usize,
    pub suggestion_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            threshold: 0.4,
            min_query_len: 2,
            default_limit: 20,
            suggestion_limit: 5,
        }
    }
}

/// `[cart]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    /// Storage key used when nobody is signed in.
    pub guest_key: String,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            guest_key: "cart:guest".to_string(),
        }
    }
}

/// `[uploads]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_bytes: usize,
    pub mime_prefix: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_bytes: MAX_IMAGE_BYTES,
            mime_prefix: IMAGE_MIME_PREFIX.to_string(),
        }
    }
}

impl UploadSettings {
    pub fn to_limits(&self) -> UploadLimits {
        UploadLimits {
            max_bytes: self.max_bytes,
            mime_prefix: self.mime_prefix.clone(),
        }
    }
}

/// `[preferences]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    pub max_recent_searches: usize,
    pub default_language: Language,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            max_recent_searches: MAX_RECENT_SEARCHES,
            default_language: Language::default(),
        }
    }
}

impl PreferenceSettings {
    /// Build a [`Preferences`] handle over `cache` with these settings.
    pub fn preferences(&self, cache: Cache) -> Preferences {
        Preferences::new(cache)
            .with_max_recent(self.max_recent_searches)
            .with_default_language(self.default_language)
    }
}
