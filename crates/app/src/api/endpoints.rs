//! Backend endpoint paths.

#![expect(missing_docs, reason = "path constants are named after their endpoint")]

pub const FETCH_PRODUCTS: &str = "/fetchProducts";
pub const FETCH_BRANDS: &str = "/fetchBrands";
pub const FETCH_CATEGORIES: &str = "/fetchCategories";
pub const CREATE_PRODUCT: &str = "/createProduct";
pub const CHECK_PRODUCT_NAME: &str = "/checkProductName";
pub const CHECK_BARCODE: &str = "/checkBarCode";
pub const FETCH_PRODUCT_BY_ID: &str = "/fetchProductById";
pub const UPDATE_PRODUCT: &str = "/updateProduct";
pub const FIND_PRODUCTS_BY_BRAND: &str = "/findProductsByBrandName";
pub const FIND_PRODUCTS_BY_CATEGORY: &str = "/findProductsByCategoryName";

pub const CUSTOMER_ORDER_REPORT: &str = "/generateCustomerOrderReport";
pub const SALES_REPORT: &str = "/generateSalesReport";

pub const LOGIN: &str = "/login";
pub const CREATE_CUSTOMER: &str = "/createCustomer";
pub const CHECK_USERNAME: &str = "/checkUsername";
pub const CHECK_EMAIL: &str = "/checkEmail";
pub const CHECK_CITY_NAME: &str = "/checkCityName";
pub const CHECK_STATE_NAME: &str = "/checkStateName";
pub const CHECK_COUNTRY_NAME: &str = "/checkCountryName";

pub const FETCH_ORDERS: &str = "/fetchOrderDetails";
pub const FETCH_ORDER_BY_ID: &str = "/fetchOrderById";
pub const CREATE_ORDER: &str = "/createOrderDetails";
pub const UPDATE_ORDER: &str = "/updateOrderDetails";
