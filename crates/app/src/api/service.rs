//! Inventory API service seam.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiError,
    domain::{
        customers::models::{Credentials, CustomerId, NewCustomer},
        orders::models::{NewOrder, Order, OrderId, OrderUpdate},
        products::models::{Brand, Category, NewProduct, Product, ProductId},
        reports::models::{CustomerOrderReportRow, SalesReportRow},
    },
};

/// One method per backend endpoint.
///
/// Implementations perform exactly one request per call: no retries, no
/// timeouts and no caching.
#[automock]
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Lists every product.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Lists the brand reference list.
    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError>;

    /// Lists the category reference list.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Creates a product and returns the stored record.
    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError>;

    /// Returns `true` when a product with this name already exists.
    async fn check_product_name(&self, product_name: &str) -> Result<bool, ApiError>;

    /// Returns `true` when a product with this barcode already exists.
    async fn check_barcode(&self, barcode: &str) -> Result<bool, ApiError>;

    /// Fetches a single product, including its brand and category names.
    async fn fetch_product(&self, product: ProductId) -> Result<Product, ApiError>;

    /// Replaces a product and returns the stored record.
    async fn update_product(&self, product: &Product) -> Result<Product, ApiError>;

    /// Lists the products of a brand.
    async fn find_products_by_brand(&self, brand_name: &str) -> Result<Vec<Product>, ApiError>;

    /// Lists the products of a category.
    async fn find_products_by_category(
        &self,
        category_name: &str,
    ) -> Result<Vec<Product>, ApiError>;

    /// Generates the order report of one customer.
    async fn customer_order_report(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<CustomerOrderReportRow>, ApiError>;

    /// Generates the sales report.
    async fn sales_report(&self) -> Result<Vec<SalesReportRow>, ApiError>;

    /// Returns `true` when the credentials are accepted.
    async fn login(&self, credentials: &Credentials) -> Result<bool, ApiError>;

    /// Registers a customer.
    async fn register(&self, customer: &NewCustomer) -> Result<(), ApiError>;

    /// Returns `true` when the user name is already taken.
    async fn check_username(&self, username: &str) -> Result<bool, ApiError>;

    /// Returns `true` when the email is already registered.
    async fn check_email(&self, email: &str) -> Result<bool, ApiError>;

    /// Returns `true` when the city is known to the backend.
    async fn check_city_name(&self, city_name: &str) -> Result<bool, ApiError>;

    /// Returns `true` when the state is known to the backend.
    async fn check_state_name(&self, state_name: &str) -> Result<bool, ApiError>;

    /// Returns `true` when the country is known to the backend.
    async fn check_country_name(&self, country_name: &str) -> Result<bool, ApiError>;

    /// Lists every order.
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Fetches a single order.
    async fn fetch_order(&self, order: OrderId) -> Result<Order, ApiError>;

    /// Places an order and returns the stored record.
    async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError>;

    /// Changes the quantity or product of an existing order.
    async fn update_order(&self, order: &OrderUpdate) -> Result<(), ApiError>;
}
