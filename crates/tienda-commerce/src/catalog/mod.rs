//! Product catalog module.
//!
//! Contains the product record, the admin product form, listing filters and
//! live stock checks.

mod filter;
mod product;
mod stock;

pub use filter::{CatalogFilter, Filter, SortOption};
pub use product::{NewProduct, Product, ProductForm, ProductPatch, ProductStatus};
pub use stock::{check_stock, LiveStock, StockCheck, StockLookup};
