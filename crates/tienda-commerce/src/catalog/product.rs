//! Product records and the admin product form.

use crate::coerce::{count_or_zero, percent_or_zero, price_or_none, price_or_zero};
use crate::ids::ProductId;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Product is listed and purchasable.
    #[default]
    Active,
    /// Product is hidden from the storefront.
    Inactive,
    /// Product is being prepared, not visible to customers.
    Draft,
    /// Product is listed but cannot be bought.
    OutOfStock,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Draft => "draft",
            ProductStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            "draft" => Some(ProductStatus::Draft),
            "out_of_stock" => Some(ProductStatus::OutOfStock),
            _ => None,
        }
    }
}

/// A product in the catalog, as stored in the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Selling price.
    #[serde(default)]
    pub price: f64,
    /// Price before discount, shown struck through.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Flat shipping cost; `None` means free or not set.
    #[serde(default)]
    pub shipping_cost: Option<f64>,
    /// Discount percentage, `0..=100`.
    #[serde(default)]
    pub discount: u8,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product can be added to a cart at all.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active && self.stock > 0
    }

    /// Whether the product shows a reduced price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }
}

/// A product that has not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub tags: Vec<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub shipping_cost: Option<f64>,
    pub discount: u8,
    pub stock: u32,
    pub image_url: String,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: ProductStatus,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            ..Default::default()
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the store id and write timestamps.
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            brand: self.brand,
            tags: self.tags,
            price: self.price,
            original_price: self.original_price,
            shipping_cost: self.shipping_cost,
            discount: self.discount,
            stock: self.stock,
            image_url: self.image_url,
            is_new: self.is_new,
            is_featured: self.is_featured,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a product. Absent fields are left untouched.
///
/// The nullable price fields use a double option: `Some(None)` clears the
/// stored value, `None` leaves it alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

impl ProductPatch {
    /// Merge the patch over `product`, field by field.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(brand) = &self.brand {
            product.brand = brand.clone();
        }
        if let Some(tags) = &self.tags {
            product.tags = tags.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(shipping_cost) = self.shipping_cost {
            product.shipping_cost = shipping_cost;
        }
        if let Some(discount) = self.discount {
            product.discount = discount;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(is_new) = self.is_new {
            product.is_new = is_new;
        }
        if let Some(is_featured) = self.is_featured {
            product.is_featured = is_featured;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }
}

/// Raw admin input for a product, every field as typed.
///
/// Numbers are coerced rather than validated: the only hard checks are the
/// required `name` and `category`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    /// Comma-separated tags.
    pub tags: String,
    pub price: String,
    pub original_price: String,
    pub shipping_cost: String,
    pub discount: String,
    pub stock: String,
    pub image_url: String,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: String,
}

impl ProductForm {
    /// Fill the form from a stored product, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            tags: product.tags.join(", "),
            price: product.price.to_string(),
            original_price: product.original_price.map(|v| v.to_string()).unwrap_or_default(),
            shipping_cost: product.shipping_cost.map(|v| v.to_string()).unwrap_or_default(),
            discount: product.discount.to_string(),
            stock: product.stock.to_string(),
            image_url: product.image_url.clone(),
            is_new: product.is_new,
            is_featured: product.is_featured,
            status: product.status.as_str().to_string(),
        }
    }

    /// Check the required fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "product name is required".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "product category is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and coerce into a new product.
    pub fn to_new_product(&self) -> Result<NewProduct, CommerceError> {
        self.validate()?;
        Ok(NewProduct {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            brand: self.brand.trim().to_string(),
            tags: split_tags(&self.tags),
            price: price_or_zero(&self.price),
            original_price: price_or_none(&self.original_price),
            shipping_cost: price_or_none(&self.shipping_cost),
            discount: percent_or_zero(&self.discount),
            stock: count_or_zero(&self.stock),
            image_url: self.image_url.trim().to_string(),
            is_new: self.is_new,
            is_featured: self.is_featured,
            status: ProductStatus::from_str(&self.status).unwrap_or_default(),
        })
    }

    /// Validate and coerce into a full-replacement patch.
    pub fn to_patch(&self) -> Result<ProductPatch, CommerceError> {
        let product = self.to_new_product()?;
        Ok(ProductPatch {
            name: Some(product.name),
            description: Some(product.description),
            category: Some(product.category),
            brand: Some(product.brand),
            tags: Some(product.tags),
            price: Some(product.price),
            original_price: Some(product.original_price),
            shipping_cost: Some(product.shipping_cost),
            discount: Some(product.discount),
            stock: Some(product.stock),
            image_url: Some(product.image_url),
            is_new: Some(product.is_new),
            is_featured: Some(product.is_featured),
            status: Some(product.status),
        })
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: "Café de Altura".to_string(),
            category: "Bebidas".to_string(),
            price: "12,50".to_string(),
            stock: "10".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(ProductStatus::from_str("out_of_stock"), Some(ProductStatus::OutOfStock));
        assert_eq!(ProductStatus::OutOfStock.as_str(), "out_of_stock");
        assert_eq!(
            serde_json::to_string(&ProductStatus::OutOfStock).unwrap(),
            r#""out_of_stock""#
        );
        assert_eq!(ProductStatus::from_str("archived"), None);
    }

    #[test]
    fn test_form_requires_name_and_category() {
        let mut f = form();
        f.name = "  ".to_string();
        assert!(matches!(f.validate(), Err(CommerceError::ValidationError(_))));

        let mut f = form();
        f.category.clear();
        assert!(f.to_new_product().is_err());
    }

    #[test]
    fn test_form_coerces_numbers_without_rejecting() {
        let mut f = form();
        f.price = "doce".to_string();
        f.original_price = "abc".to_string();
        f.shipping_cost = String::new();
        f.discount = "250".to_string();
        f.stock = "-3".to_string();
        f.tags = "café, , orgánico ".to_string();

        let product = f.to_new_product().unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.original_price, None);
        assert_eq!(product.shipping_cost, None);
        assert_eq!(product.discount, 100);
        assert_eq!(product.stock, 0);
        assert_eq!(product.tags, vec!["café", "orgánico"]);
    }

    #[test]
    fn test_form_parses_decimal_comma() {
        let product = form().to_new_product().unwrap();
        assert_eq!(product.price, 12.5);
        assert_eq!(product.stock, 10);
        assert_eq!(product.status, ProductStatus::Active);
    }

    #[test]
    fn test_product_wire_format() {
        let product = NewProduct::new("Mate", "Bebidas", 3.0)
            .with_stock(4)
            .into_product(ProductId::new("p1"), Utc::now());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["originalPrice"], serde_json::Value::Null);
        assert_eq!(json["isFeatured"], false);
        assert_eq!(json["status"], "active");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_patch_clears_nullable_price() {
        let mut product = NewProduct::new("Mate", "Bebidas", 3.0)
            .into_product(ProductId::new("p1"), Utc::now());
        product.original_price = Some(5.0);

        let patch = ProductPatch {
            original_price: Some(None),
            ..Default::default()
        };
        patch.apply_to(&mut product);
        assert_eq!(product.original_price, None);
        assert_eq!(product.name, "Mate");

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"originalPrice": null}));
    }
}
