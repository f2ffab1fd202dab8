//! Product lookups.

use tracing::warn;

use crate::{
    api::{ApiError, InventoryApi},
    domain::{
        lookup::{Lookup, LookupError},
        products::models::{Brand, Category, Product, ProductId},
    },
};

/// Lists every product.
///
/// # Errors
///
/// Propagates the API failure.
pub async fn list_products(api: &dyn InventoryApi) -> Result<Vec<Product>, ApiError> {
    api.list_products().await
}

/// Lists the brand reference list.
///
/// # Errors
///
/// Propagates the API failure.
pub async fn list_brands(api: &dyn InventoryApi) -> Result<Vec<Brand>, ApiError> {
    api.list_brands().await
}

/// Lists the category reference list.
///
/// # Errors
///
/// Propagates the API failure.
pub async fn list_categories(api: &dyn InventoryApi) -> Result<Vec<Category>, ApiError> {
    api.list_categories().await
}

/// Finds a product by the id typed into a search box.
///
/// # Errors
///
/// Returns a [`LookupError`] whose text is the user-visible message.
pub async fn find_product(
    api: &dyn InventoryApi,
    product_id: &str,
) -> Result<Lookup<Product>, LookupError> {
    let product_id = product_id.trim();

    if product_id.is_empty() {
        return Err(LookupError::Blank("Product ID cannot be blank."));
    }

    let Ok(product_id) = product_id.parse::<ProductId>() else {
        return Err(LookupError::Invalid("Product ID must be a number."));
    };

    let product = api.fetch_product(product_id).await.map_err(|error| {
        warn!(%product_id, %error, "failed to fetch product");

        LookupError::failed("Product not found.")(error)
    })?;

    let message = format!("Product fetched successfully with ID: {}", product.product_id);

    Ok(Lookup::new(product, message))
}

/// Lists the products of the brand typed into a search box.
///
/// # Errors
///
/// Returns a [`LookupError`] whose text is the user-visible message.
pub async fn find_products_by_brand(
    api: &dyn InventoryApi,
    brand_name: &str,
) -> Result<Lookup<Vec<Product>>, LookupError> {
    let brand_name = brand_name.trim();

    if brand_name.is_empty() {
        return Err(LookupError::Blank("Brand name cannot be blank."));
    }

    let products = api
        .find_products_by_brand(brand_name)
        .await
        .map_err(LookupError::failed(
            "Failed to fetch products for the specified brand.",
        ))?;

    Ok(Lookup::new(
        products,
        format!("Products fetched successfully for brand: {brand_name}"),
    ))
}

/// Lists the products of the category typed into a search box.
///
/// # Errors
///
/// Returns a [`LookupError`] whose text is the user-visible message.
pub async fn find_products_by_category(
    api: &dyn InventoryApi,
    category_name: &str,
) -> Result<Lookup<Vec<Product>>, LookupError> {
    let category_name = category_name.trim();

    if category_name.is_empty() {
        return Err(LookupError::Blank("Category name cannot be blank."));
    }

    let products = api
        .find_products_by_category(category_name)
        .await
        .map_err(LookupError::failed(
            "Failed to fetch products for the specified category.",
        ))?;

    Ok(Lookup::new(
        products,
        format!("Products fetched successfully for category: {category_name}"),
    ))
}
