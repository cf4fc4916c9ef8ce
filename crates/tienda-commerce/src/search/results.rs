//! Search hits and suggestions.

use crate::catalog::Product;
use crate::config::FieldWeights;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A searchable product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Description,
    Category,
    Tags,
    Brand,
}

impl SearchField {
    pub fn weight(&self, weights: &FieldWeights) -> f64 {
        match self {
            SearchField::Name => weights.name,
            SearchField::Description => weights.description,
            SearchField::Category => weights.category,
            SearchField::Tags => weights.tags,
            SearchField::Brand => weights.brand,
        }
    }
}

/// Where a query matched inside one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: SearchField,
    /// The matched field value as stored (for tags, the matching tag).
    pub value: String,
    /// `value` after accent folding and lowercasing. Its character count can
    /// differ from `value`'s.
    pub normalized: String,
    /// Character range of the match in `normalized`, not in `value`.
    pub span: (usize, usize),
    /// Errors relative to query length, `0.0` is exact.
    pub score: f64,
}

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub product: Product,
    /// Combined score; lower is better and `0.0` is an exact match.
    pub score: f64,
    /// Matching fields, in field order.
    pub matches: Vec<FieldMatch>,
}

/// Lightweight projection for a search dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub category: String,
}

impl From<&SearchHit> for Suggestion {
    fn from(hit: &SearchHit) -> Self {
        Suggestion {
            id: hit.product.id.clone(),
            name: hit.product.name.clone(),
            image: hit.product.image_url.clone(),
            price: hit.product.price,
            category: hit.product.category.clone(),
        }
    }
}
