//! Best-effort shopper preferences kept in local storage.

use crate::{Cache, CacheError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key holding the interface language.
pub const LANGUAGE_KEY: &str = "language";
/// Key holding recent search terms.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
/// Key holding favourite product ids.
pub const FAVORITES_KEY: &str = "favorites";

/// Default number of recent searches kept.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// The other language, for the header toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferences manager.
///
/// Every value here is a cache, never a system of record: reads fall back to
/// defaults when the stored value is missing or unreadable.
///
/// # Example
///
/// ```rust,ignore
/// let prefs = Preferences::new(Cache::in_memory());
/// prefs.push_recent_search("mochila")?;
/// prefs.toggle_favorite("p-1")?;
/// ```
#[derive(Debug, Clone)]
pub struct Preferences {
    cache: Cache,
    max_recent: usize,
    default_language: Language,
}

impl Preferences {
    /// Create a preferences manager over a cache.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            max_recent: MAX_RECENT_SEARCHES,
            default_language: Language::default(),
        }
    }

    /// Override how many recent searches are kept.
    pub fn with_max_recent(mut self, max_recent: usize) -> Self {
        self.max_recent = max_recent;
        self
    }

    /// Override the language used when none is stored.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Current interface language.
    pub fn language(&self) -> Language {
        match self.cache.get::<Language>(LANGUAGE_KEY) {
            Ok(Some(language)) => language,
            Ok(None) => self.default_language,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable language preference");
                self.default_language
            }
        }
    }

    /// Persist the interface language.
    pub fn set_language(&self, language: Language) -> Result<(), CacheError> {
        self.cache.set(LANGUAGE_KEY, &language)
    }

    /// Recent search terms, most recent first.
    pub fn recent_searches(&self) -> Vec<String> {
        self.cache.get_or_default(RECENT_SEARCHES_KEY)
    }

    /// Record a search term.
    ///
    /// Blank terms are ignored. A term already present (compared
    /// case-insensitively) moves to the front instead of repeating.
    pub fn push_recent_search(&self, term: &str) -> Result<Vec<String>, CacheError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(self.recent_searches());
        }

        let folded = term.to_lowercase();
        let mut recent = self.recent_searches();
        recent.retain(|t| t.to_lowercase() != folded);
        recent.insert(0, term.to_string());
        recent.truncate(self.max_recent);

        self.cache.set(RECENT_SEARCHES_KEY, &recent)?;
        Ok(recent)
    }

    /// Forget every recent search.
    pub fn clear_recent_searches(&self) -> Result<(), CacheError> {
        self.cache.delete(RECENT_SEARCHES_KEY)
    }

    /// Favourite product ids in the order they were added.
    pub fn favorites(&self) -> Vec<String> {
        self.cache.get_or_default(FAVORITES_KEY)
    }

    /// Whether a product is a favourite.
    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites().iter().any(|id| id == product_id)
    }

    /// Add or remove a favourite. Returns `true` if it is now a favourite.
    pub fn toggle_favorite(&self, product_id: &str) -> Result<bool, CacheError> {
        let mut favorites = self.favorites();
        let now_favorite = if favorites.iter().any(|id| id == product_id) {
            favorites.retain(|id| id != product_id);
            false
        } else {
            favorites.push(product_id.to_string());
            true
        };
        self.cache.set(FAVORITES_KEY, &favorites)?;
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::new(Cache::in_memory())
    }

    #[test]
    fn test_language_defaults_to_spanish() {
        let prefs = prefs();
        assert_eq!(prefs.language(), Language::Es);

        prefs.set_language(Language::En).unwrap();
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn test_language_parse_and_toggle() {
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Es.toggled(), Language::En);
    }

    #[test]
    fn test_corrupt_language_falls_back() {
        let cache = Cache::in_memory();
        cache.set_raw(LANGUAGE_KEY, "\"klingon\"").unwrap();
        let prefs = Preferences::new(cache).with_default_language(Language::En);
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn test_recent_searches_most_recent_first() {
        let prefs = prefs();
        prefs.push_recent_search("mochila").unwrap();
        prefs.push_recent_search("carpa").unwrap();
        assert_eq!(prefs.recent_searches(), vec!["carpa", "mochila"]);
    }

    #[test]
    fn test_recent_searches_deduplicated() {
        let prefs = prefs();
        prefs.push_recent_search("mochila").unwrap();
        prefs.push_recent_search("carpa").unwrap();
        prefs.push_recent_search("Mochila").unwrap();
        assert_eq!(prefs.recent_searches(), vec!["Mochila", "carpa"]);
    }

    #[test]
    fn test_recent_searches_capped_at_five() {
        let prefs = prefs();
        for term in ["a1", "a2", "a3", "a4", "a5", "a6"] {
            prefs.push_recent_search(term).unwrap();
        }
        assert_eq!(
            prefs.recent_searches(),
            vec!["a6", "a5", "a4", "a3", "a2"]
        );
    }

    #[test]
    fn test_blank_search_ignored() {
        let prefs = prefs();
        prefs.push_recent_search("   ").unwrap();
        assert!(prefs.recent_searches().is_empty());

        prefs.push_recent_search("x").unwrap();
        prefs.clear_recent_searches().unwrap();
        assert!(prefs.recent_searches().is_empty());
    }

    #[test]
    fn test_toggle_favorite() {
        let prefs = prefs();
        assert!(prefs.toggle_favorite("p1").unwrap());
        assert!(prefs.toggle_favorite("p2").unwrap());
        assert!(prefs.is_favorite("p1"));

        assert!(!prefs.toggle_favorite("p1").unwrap());
        assert_eq!(prefs.favorites(), vec!["p2"]);
    }
}
