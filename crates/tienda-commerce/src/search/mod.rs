//! Client-side product search.
//!
//! A point-in-time fuzzy index over the catalog: accent- and
//! case-insensitive, typo tolerant, weighted by field.

mod fuzzy;
mod index;
mod normalize;
mod results;

pub use fuzzy::{best_match, FuzzyMatch};
pub use index::{IndexEntry, SearchIndex};
pub use normalize::normalize;
pub use results::{FieldMatch, SearchField, SearchHit, Suggestion};
