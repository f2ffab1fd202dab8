//! Product drafts and their validator.

use rust_decimal::Decimal;

use crate::{
    domain::{
        products::models::{BrandId, CategoryId, NewProduct, Product, ProductId},
        rules::{self, Numeric},
    },
    forms::{CheckField, Draft, ErrorMap, FormField},
};

/// Inputs of the product forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    /// Display name.
    ProductName,
    /// Units in stock.
    StockAvailable,
    /// Unit price.
    Price,
    /// Bar code.
    Barcode,
    /// Brand selection.
    BrandId,
    /// Category selection.
    CategoryId,
}

impl FormField for ProductField {
    const ALL: &'static [Self] = &[
        Self::ProductName,
        Self::StockAvailable,
        Self::Price,
        Self::Barcode,
        Self::BrandId,
        Self::CategoryId,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::StockAvailable => "stockAvailable",
            Self::Price => "price",
            Self::Barcode => "barcode",
            Self::BrandId => "brandId",
            Self::CategoryId => "categoryId",
        }
    }

    fn check(self) -> Option<CheckField> {
        match self {
            Self::ProductName => Some(CheckField::ProductName),
            Self::Barcode => Some(CheckField::Barcode),
            _ => None,
        }
    }
}

/// Raw inputs of a product.
///
/// Brand and category hold the selected id; empty means nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Display name.
    pub product_name: String,
    /// Units in stock, a whole number.
    pub stock_available: String,
    /// Unit price, greater than zero.
    pub price: String,
    /// Bar code.
    pub barcode: String,
    /// Selected brand id.
    pub brand_id: String,
    /// Selected category id.
    pub category_id: String,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            stock_available: product.stock_available.to_string(),
            price: product.price.to_string(),
            barcode: product.barcode.clone(),
            brand_id: product.brand_id.to_string(),
            category_id: product.category_id.to_string(),
        }
    }
}

impl Draft for ProductDraft {
    type Field = ProductField;
    type Payload = NewProduct;

    fn value(&self, field: ProductField) -> &str {
        match field {
            ProductField::ProductName => &self.product_name,
            ProductField::StockAvailable => &self.stock_available,
            ProductField::Price => &self.price,
            ProductField::Barcode => &self.barcode,
            ProductField::BrandId => &self.brand_id,
            ProductField::CategoryId => &self.category_id,
        }
    }

    fn value_mut(&mut self, field: ProductField) -> &mut String {
        match field {
            ProductField::ProductName => &mut self.product_name,
            ProductField::StockAvailable => &mut self.stock_available,
            ProductField::Price => &mut self.price,
            ProductField::Barcode => &mut self.barcode,
            ProductField::BrandId => &mut self.brand_id,
            ProductField::CategoryId => &mut self.category_id,
        }
    }

    fn parse(&self) -> Result<NewProduct, ErrorMap> {
        let mut errors = ErrorMap::new();

        let product_name = self.product_name.trim();

        if product_name.is_empty() {
            errors.insert("productName", "Product name cannot be blank.");
        }

        let stock_available = parse_stock(&self.stock_available, &mut errors);
        let price = parse_price(&self.price, &mut errors);

        let barcode = self.barcode.trim();

        if barcode.is_empty() {
            errors.insert("barcode", "Bar code cannot be blank.");
        } else if !rules::is_barcode(barcode) {
            errors.insert(
                "barcode",
                "Bar code must be 4 uppercase letters followed by 4 digits.",
            );
        }

        let brand_id = self.brand_id.parse::<BrandId>().ok();

        if brand_id.is_none() {
            errors.insert("brandId", "Brand name is mandatory.");
        }

        let category_id = self.category_id.parse::<CategoryId>().ok();

        if category_id.is_none() {
            errors.insert("categoryId", "Category name is mandatory.");
        }

        match (stock_available, price, brand_id, category_id) {
            (Some(stock_available), Some(price), Some(brand_id), Some(category_id))
                if errors.is_empty() =>
            {
                Ok(NewProduct {
                    product_name: product_name.to_string(),
                    stock_available,
                    price,
                    barcode: barcode.to_string(),
                    brand_id,
                    category_id,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_stock(value: &str, errors: &mut ErrorMap) -> Option<u32> {
    let message = match rules::whole_number(value) {
        Numeric::Blank => "Stock quantity cannot be null.",
        Numeric::Malformed => "Stock available must be a whole number.",
        Numeric::Value(stock) if stock < 0 => "Stock available cannot be negative.",
        Numeric::Value(stock) => match u32::try_from(stock) {
            Ok(stock) => return Some(stock),
            Err(_) => "Stock available must be a whole number.",
        },
    };

    errors.insert("stockAvailable", message);

    None
}

fn parse_price(value: &str, errors: &mut ErrorMap) -> Option<Decimal> {
    let message = match rules::decimal(value) {
        Numeric::Blank => "Price cannot be null.",
        Numeric::Malformed => "Price must be a number.",
        Numeric::Value(price) if price <= Decimal::ZERO => "Price must be greater than 0.",
        Numeric::Value(price) => return Some(price),
    };

    errors.insert("price", message);

    None
}

/// The product an update form is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProduct {
    /// Backend id.
    pub product_id: ProductId,
    /// Name as fetched.
    pub product_name: String,
    /// Bar code as fetched.
    pub barcode: String,
}

/// Raw inputs of an existing product.
///
/// Empty until a product has been fetched; submitting an empty edit draft
/// is refused before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductEditDraft {
    /// The fetched product, if any.
    pub loaded: Option<LoadedProduct>,
    /// Editable inputs.
    pub fields: ProductDraft,
}

impl From<&Product> for ProductEditDraft {
    fn from(product: &Product) -> Self {
        Self {
            loaded: Some(LoadedProduct {
                product_id: product.product_id,
                product_name: product.product_name.clone(),
                barcode: product.barcode.clone(),
            }),
            fields: ProductDraft::from(product),
        }
    }
}

impl Draft for ProductEditDraft {
    type Field = ProductField;
    type Payload = Product;

    fn value(&self, field: ProductField) -> &str {
        self.fields.value(field)
    }

    fn value_mut(&mut self, field: ProductField) -> &mut String {
        self.fields.value_mut(field)
    }

    fn parse(&self) -> Result<Product, ErrorMap> {
        let product = self.fields.parse()?;

        match &self.loaded {
            Some(loaded) => Ok(product.with_id(loaded.product_id)),
            None => Err(ErrorMap::new()),
        }
    }

    fn is_original(&self, field: ProductField) -> bool {
        let Some(loaded) = &self.loaded else {
            return false;
        };

        let value = self.fields.value(field).trim();

        match field {
            ProductField::ProductName => value == loaded.product_name,
            ProductField::Barcode => value == loaded.barcode,
            _ => false,
        }
    }
}
