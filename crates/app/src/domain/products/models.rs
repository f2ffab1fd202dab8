//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Brand Id
pub type BrandId = TypedId<Brand>;

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Product record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend id.
    pub product_id: ProductId,
    /// Display name, unique across products.
    pub product_name: String,
    /// Units in stock.
    pub stock_available: u32,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Four uppercase letters then four digits, unique across products.
    pub barcode: String,
    /// Brand the product is filed under.
    pub brand_id: BrandId,
    /// Brand name, when the backend joins it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Category the product is filed under.
    pub category_id: CategoryId,
    /// Category name, when the backend joins it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// New Product payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub product_name: String,
    /// Units in stock.
    pub stock_available: u32,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Bar code.
    pub barcode: String,
    /// Selected brand.
    pub brand_id: BrandId,
    /// Selected category.
    pub category_id: CategoryId,
}

impl NewProduct {
    /// Attach an identifier, turning the payload into a full record.
    #[must_use]
    pub fn with_id(self, product_id: ProductId) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            stock_available: self.stock_available,
            price: self.price,
            barcode: self.barcode,
            brand_id: self.brand_id,
            brand_name: None,
            category_id: self.category_id,
            category_name: None,
        }
    }
}

/// Brand reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Backend id.
    pub brand_id: BrandId,
    /// Display name.
    pub brand_name: String,
}

/// Category reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend id.
    pub category_id: CategoryId,
    /// Display name.
    pub category_name: String,
}
