//! Repository over the `products` collection.

use super::{Record, Repository};
use crate::catalog::{CatalogFilter, NewProduct, Product, ProductForm, ProductPatch};
use crate::ids::ProductId;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use tienda_db::{StoredDocument, PRODUCTS};

pub type ProductRepository = Repository<Product>;

impl Record for Product {
    const COLLECTION: &'static str = PRODUCTS;
    type Draft = NewProduct;
    type Patch = ProductPatch;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn from_draft(draft: NewProduct, now: DateTime<Utc>) -> Self {
        draft.into_product(ProductId::default(), now)
    }

    fn set_id(&mut self, id: String) {
        self.id = ProductId::new(id);
    }

    fn set_updated_at(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn apply_patch(&mut self, patch: &ProductPatch) {
        patch.apply_to(self);
    }

    fn decode(doc: &StoredDocument) -> Result<Self, CommerceError> {
        Ok(doc.deserialize()?)
    }
}

impl Repository<Product> {
    /// Coerce the admin form and add the product.
    pub async fn create_from_form(&mut self, form: &ProductForm) -> Result<Product, CommerceError> {
        let draft = form.to_new_product()?;
        self.add(draft).await
    }

    /// Coerce the admin form and write it over the stored product.
    pub async fn update_from_form(
        &mut self,
        id: &str,
        form: &ProductForm,
    ) -> Result<Product, CommerceError> {
        let patch = form.to_patch()?;
        self.update(id, patch).await
    }

    /// Storefront listing over the in-memory list.
    pub fn listing(&self, filter: &CatalogFilter) -> Vec<&Product> {
        filter.apply(self.items())
    }

    /// Distinct categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in self.items() {
            let category = product.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}
