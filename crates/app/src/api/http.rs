//! HTTP client for the inventory backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    api::{ApiError, InventoryApi, endpoints},
    domain::{
        customers::models::{Credentials, CustomerId, NewCustomer},
        orders::models::{NewOrder, Order, OrderId, OrderUpdate},
        products::models::{Brand, Category, NewProduct, Product, ProductId},
        reports::models::{CustomerOrderReportRow, SalesReportRow},
    },
};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for connecting to the inventory backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend address, e.g. `"http://localhost:8080"`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// [`InventoryApi`] over HTTP: `GET` with query parameters, `POST` with JSON.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    config: ApiConfig,
    http: Client,
}

impl HttpInventoryApi {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        let response = self.send(path, request).await?;

        Ok(response.json().await?)
    }

    async fn post<B, T>(&self, path: &'static str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.send(path, request).await?;

        Ok(response.json().await?)
    }

    async fn post_discarding_body<B>(&self, path: &'static str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = self.http.post(self.url(path)).json(body);

        self.send(path, request).await?;

        Ok(())
    }

    async fn send(&self, path: &'static str, request: RequestBuilder) -> Result<Response, ApiError> {
        debug!(path, "sending request");

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    warn!(path, %status, %error, "failed to read error body");

                    String::new()
                }
            };

            warn!(path, %status, "request rejected by backend");

            return Err(ApiError::Status {
                path,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get(endpoints::FETCH_PRODUCTS, &[]).await
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get(endpoints::FETCH_BRANDS, &[]).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(endpoints::FETCH_CATEGORIES, &[]).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post(endpoints::CREATE_PRODUCT, product).await
    }

    async fn check_product_name(&self, product_name: &str) -> Result<bool, ApiError> {
        self.get(endpoints::CHECK_PRODUCT_NAME, &[("productName", product_name)])
            .await
    }

    async fn check_barcode(&self, barcode: &str) -> Result<bool, ApiError> {
        self.get(endpoints::CHECK_BARCODE, &[("barcode", barcode)])
            .await
    }

    async fn fetch_product(&self, product: ProductId) -> Result<Product, ApiError> {
        let id = product.to_string();

        self.get(endpoints::FETCH_PRODUCT_BY_ID, &[("productId", id.as_str())])
            .await
    }

    async fn update_product(&self, product: &Product) -> Result<Product, ApiError> {
        self.post(endpoints::UPDATE_PRODUCT, product).await
    }

    async fn find_products_by_brand(&self, brand_name: &str) -> Result<Vec<Product>, ApiError> {
        self.get(endpoints::FIND_PRODUCTS_BY_BRAND, &[("brandName", brand_name)])
            .await
    }

    async fn find_products_by_category(
        &self,
        category_name: &str,
    ) -> Result<Vec<Product>, ApiError> {
        self.get(
            endpoints::FIND_PRODUCTS_BY_CATEGORY,
            &[("categoryName", category_name)],
        )
        .await
    }

    async fn customer_order_report(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<CustomerOrderReportRow>, ApiError> {
        let id = customer.to_string();

        self.get(endpoints::CUSTOMER_ORDER_REPORT, &[("customerId", id.as_str())])
            .await
    }

    async fn sales_report(&self) -> Result<Vec<SalesReportRow>, ApiError> {
        self.get(endpoints::SALES_REPORT, &[]).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<bool, ApiError> {
        self.get(
            endpoints::LOGIN,
            &[
                ("username", credentials.username.as_str()),
                ("userpassword", credentials.password.as_str()),
            ],
        )
        .await
    }

    async fn register(&self, customer: &NewCustomer) -> Result<(), ApiError> {
        self.post_discarding_body(endpoints::CREATE_CUSTOMER, customer)
            .await
    }

    async fn check_username(&self, username: &str) -> Result<bool, ApiError> {
        self.get(endpoints::CHECK_USERNAME, &[("username", username)])
            .await
    }

    async fn check_email(&self, email: &str) -> Result<bool, ApiError> {
        self.get(endpoints::CHECK_EMAIL, &[("email", email)]).await
    }

    async fn check_city_name(&self, city_name: &str) -> Result<bool, ApiError> {
        self.get(endpoints::CHECK_CITY_NAME, &[("cityName", city_name)])
            .await
    }

    async fn check_state_name(&self, state_name: &str) -> Result<bool, ApiError> {
        self.get(endpoints::CHECK_STATE_NAME, &[("stateName", state_name)])
            .await
    }

    async fn check_country_name(&self, country_name: &str) -> Result<bool, ApiError> {
        self.get(
            endpoints::CHECK_COUNTRY_NAME,
            &[("countryName", country_name)],
        )
        .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get(endpoints::FETCH_ORDERS, &[]).await
    }

    async fn fetch_order(&self, order: OrderId) -> Result<Order, ApiError> {
        let id = order.to_string();

        self.get(endpoints::FETCH_ORDER_BY_ID, &[("orderId", id.as_str())])
            .await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post(endpoints::CREATE_ORDER, order).await
    }

    async fn update_order(&self, order: &OrderUpdate) -> Result<(), ApiError> {
        self.post_discarding_body(endpoints::UPDATE_ORDER, order)
            .await
    }
}
