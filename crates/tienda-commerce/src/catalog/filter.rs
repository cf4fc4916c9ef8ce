//! Storefront listing filters and sort orders.
//!
//! These run over the in-memory product list held by the repository; they
//! never touch the store.

use crate::catalog::{Product, ProductStatus};
use crate::search::normalize;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single listing filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Exact category, compared accent- and case-insensitively.
    Category(String),
    /// Only featured products.
    Featured,
    /// Only products flagged as new.
    New,
    /// Only products with stock.
    InStock,
    /// Active and in stock.
    Available,
    /// Priced below the original price.
    OnSale,
    /// Filter by product status.
    Status(ProductStatus),
    /// Filter by price range, both ends inclusive.
    PriceRange { min: Option<f64>, max: Option<f64> },
    /// Substring over name, description and brand.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(name: impl Into<String>) -> Self {
        Filter::Category(name.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a text filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => normalize(&product.category) == normalize(category),
            Filter::Featured => product.is_featured,
            Filter::New => product.is_new,
            Filter::InStock => product.stock > 0,
            Filter::Available => product.is_available(),
            Filter::OnSale => product.is_on_sale(),
            Filter::Status(status) => product.status == *status,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |min| product.price >= min)
                    && max.map_or(true, |max| product.price <= max)
            }
            Filter::Text(query) => {
                let needle = normalize(query);
                if needle.is_empty() {
                    return true;
                }
                [&product.name, &product.description, &product.brand]
                    .iter()
                    .any(|field| normalize(field).contains(&needle))
            }
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Most recently created first.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Some(SortOption::Newest),
            "price_asc" => Some(SortOption::PriceAsc),
            "price_desc" => Some(SortOption::PriceDesc),
            "name_asc" => Some(SortOption::NameAsc),
            "name_desc" => Some(SortOption::NameDesc),
            _ => None,
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Newest => b.created_at.cmp(&a.created_at),
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::NameAsc => normalize(&a.name).cmp(&normalize(&b.name)),
            SortOption::NameDesc => normalize(&b.name).cmp(&normalize(&a.name)),
        }
    }
}

/// A set of filters (all must pass) plus a sort order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogFilter {
    pub filters: Vec<Filter>,
    pub sort: SortOption,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter.
    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort order.
    pub fn sorted_by(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `product` passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Filter and sort. The sort is stable.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut listed: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        listed.sort_by(|a, b| self.sort.compare(a, b));
        listed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use crate::ids::ProductId;
    use chrono::{Duration, Utc};

    fn catalog() -> Vec<Product> {
        let now = Utc::now();
        let mut mate = NewProduct::new("Mate Cocido", "Bebidas", 3.0)
            .with_stock(5)
            .into_product(ProductId::new("p1"), now - Duration::days(2));
        mate.is_featured = true;

        let cafe = NewProduct::new("Café Orgánico", "Bebidas", 12.0)
            .with_brand("Altura")
            .into_product(ProductId::new("p2"), now - Duration::days(1));

        let mut bolso = NewProduct::new("Bolso Andino", "Accesorios", 25.0)
            .with_stock(1)
            .into_product(ProductId::new("p3"), now);
        bolso.is_new = true;

        vec![mate, cafe, bolso]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let products = catalog();
        let listed = CatalogFilter::new().apply(&products);
        assert_eq!(ids(&listed), vec!["p3", "p2", "p1"]);
    }

    #[test]
    fn test_filters_combine() {
        let products = catalog();
        let filter = CatalogFilter::new()
            .with(Filter::category("bebidas"))
            .with(Filter::InStock);
        assert_eq!(ids(&filter.apply(&products)), vec!["p1"]);

        let filter = CatalogFilter::new().with(Filter::Featured);
        assert_eq!(ids(&filter.apply(&products)), vec!["p1"]);

        let filter = CatalogFilter::new().with(Filter::New);
        assert_eq!(ids(&filter.apply(&products)), vec!["p3"]);
    }

    #[test]
    fn test_available_and_on_sale() {
        let mut products = catalog();
        products[0].original_price = Some(4.0);
        products[1].original_price = Some(12.0);
        products[2].status = ProductStatus::Draft;

        let filter = CatalogFilter::new().with(Filter::OnSale);
        assert_eq!(ids(&filter.apply(&products)), vec!["p1"]);

        let filter = CatalogFilter::new().with(Filter::Available);
        assert_eq!(ids(&filter.apply(&products)), vec!["p1"]);
    }

    #[test]
    fn test_price_range_and_sort() {
        let products = catalog();
        let filter = CatalogFilter::new()
            .with(Filter::price_range(Some(3.0), Some(12.0)))
            .sorted_by(SortOption::PriceDesc);
        assert_eq!(ids(&filter.apply(&products)), vec!["p2", "p1"]);
    }

    #[test]
    fn test_text_is_accent_insensitive() {
        let products = catalog();
        let filter = CatalogFilter::new().with(Filter::text("cafe"));
        assert_eq!(ids(&filter.apply(&products)), vec!["p2"]);

        let filter = CatalogFilter::new().with(Filter::text("altura"));
        assert_eq!(ids(&filter.apply(&products)), vec!["p2"]);
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!(SortOption::from_str("price_asc"), Some(SortOption::PriceAsc));
        assert_eq!(SortOption::NameDesc.as_str(), "name_desc");
        assert_eq!(SortOption::from_str("rating"), None);
    }
}
