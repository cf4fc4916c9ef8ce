//! In-memory fuzzy product index.

use super::fuzzy::best_match;
use super::normalize;
use super::results::{FieldMatch, SearchField, SearchHit, Suggestion};
use crate::catalog::Product;
use crate::config::SearchSettings;
use crate::ids::ProductId;
use crate::CommerceError;
use tienda_db::{DocumentStore, PRODUCTS};

/// Index entry: a read-only projection of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub normalized_name: String,
    /// Name, description, category, brand and tags, normalized.
    pub searchable_text: String,
    pub product: Product,
    fields: Vec<IndexedField>,
}

#[derive(Debug, Clone, PartialEq)]
struct IndexedField {
    field: SearchField,
    value: String,
    normalized: String,
    chars: Vec<char>,
}

impl IndexedField {
    fn new(field: SearchField, value: &str) -> Self {
        let normalized = normalize(value);
        Self {
            field,
            value: value.to_string(),
            chars: normalized.chars().collect(),
            normalized,
        }
    }
}

impl IndexEntry {
    pub fn new(product: Product) -> Self {
        let normalized_name = normalize(&product.name);

        let mut fields = vec![
            IndexedField::new(SearchField::Name, &product.name),
            IndexedField::new(SearchField::Description, &product.description),
            IndexedField::new(SearchField::Category, &product.category),
        ];
        fields.extend(product.tags.iter().map(|tag| IndexedField::new(SearchField::Tags, tag)));
        fields.push(IndexedField::new(SearchField::Brand, &product.brand));

        let searchable_text = normalize(
            &[
                product.name.as_str(),
                product.description.as_str(),
                product.category.as_str(),
                product.brand.as_str(),
                product.tags.join(" ").as_str(),
            ]
            .join(" "),
        );

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            normalized_name,
            searchable_text,
            product,
            fields,
        }
    }

    /// Best match per field for `pattern`, keeping fields whose score is at
    /// most `threshold`.
    fn matches(&self, pattern: &[char], threshold: f64) -> Vec<FieldMatch> {
        let mut found: Vec<FieldMatch> = Vec::new();

        for indexed in &self.fields {
            let Some(m) = best_match(pattern, &indexed.chars) else {
                continue;
            };
            let score = m.score(pattern.len());
            if score > threshold {
                continue;
            }

            // Tags: keep the best tag only.
            if let Some(existing) = found.iter_mut().find(|f| f.field == indexed.field) {
                if score < existing.score {
                    existing.value = indexed.value.clone();
                    existing.normalized = indexed.normalized.clone();
                    existing.span = (m.start, m.end);
                    existing.score = score;
                }
                continue;
            }

            found.push(FieldMatch {
                field: indexed.field,
                value: indexed.value.clone(),
                normalized: indexed.normalized.clone(),
                span: (m.start, m.end),
                score,
            });
        }

        found
    }
}

/// Point-in-time fuzzy index over the product catalog.
///
/// Rebuilt wholesale by [`SearchIndex::load_products`]; it never sees
/// product changes made after the last load.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    settings: SearchSettings,
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Empty index.
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            entries: Vec::new(),
        }
    }

    /// Index `products` in the given order.
    pub fn build(products: Vec<Product>, settings: SearchSettings) -> Self {
        let entries = products.into_iter().map(IndexEntry::new).collect();
        Self { settings, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Fetch the full product snapshot and rebuild.
    ///
    /// If the fetch fails the current index is kept. Documents that do not
    /// decode as products are skipped.
    pub async fn load_products(&mut self, store: &dyn DocumentStore) -> Result<usize, CommerceError> {
        let docs = store.list(PRODUCTS).await.map_err(|e| {
            tracing::warn!(error = %e, "product snapshot failed, keeping previous index");
            CommerceError::from(e)
        })?;

        let mut entries = Vec::with_capacity(docs.len());
        for doc in &docs {
            match doc.deserialize::<Product>() {
                Ok(product) => entries.push(IndexEntry::new(product)),
                Err(e) => tracing::warn!(id = %doc.id, error = %e, "skipping unreadable product"),
            }
        }

        self.entries = entries;
        tracing::info!(products = self.entries.len(), "search index rebuilt");
        Ok(self.entries.len())
    }

    /// Same as [`Self::load_products`].
    pub async fn reload(&mut self, store: &dyn DocumentStore) -> Result<usize, CommerceError> {
        self.load_products(store).await
    }

    /// Ranked fuzzy search, at most `limit` hits.
    ///
    /// Queries shorter than the configured minimum return nothing. Ties keep
    /// index order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let pattern: Vec<char> = normalize(query.trim()).chars().collect();
        if pattern.len() < self.settings.min_query_len || limit == 0 || pattern.is_empty() {
            return Vec::new();
        }

        let weights = &self.settings.weights;
        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let matches = entry.matches(&pattern, self.settings.threshold);
                if matches.is_empty() {
                    return None;
                }
                let score: f64 = matches
                    .iter()
                    .map(|m| m.score.powf(m.field.weight(weights)))
                    .product();
                Some(SearchHit {
                    product: entry.product.clone(),
                    score,
                    matches,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits.truncate(limit);
        hits
    }

    /// [`Self::search`] with the configured default limit.
    pub fn search_default(&self, query: &str) -> Vec<SearchHit> {
        self.search(query, self.settings.default_limit)
    }

    /// Dropdown suggestions for `query`.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        self.search(query, limit).iter().map(Suggestion::from).collect()
    }
}
