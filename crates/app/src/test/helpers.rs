//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    api::ApiError,
    domain::{
        orders::models::{Order, OrderId},
        products::models::{Brand, BrandId, Category, CategoryId, Product, ProductId},
    },
};

pub(crate) fn brand(id: i32, name: &str) -> Brand {
    Brand {
        brand_id: BrandId::new(id),
        brand_name: name.to_string(),
    }
}

pub(crate) fn category(id: i32, name: &str) -> Category {
    Category {
        category_id: CategoryId::new(id),
        category_name: name.to_string(),
    }
}

pub(crate) fn product(id: i32, name: &str, barcode: &str) -> Product {
    Product {
        product_id: ProductId::new(id),
        product_name: name.to_string(),
        stock_available: 5,
        price: Decimal::new(95, 1),
        barcode: barcode.to_string(),
        brand_id: BrandId::new(1),
        brand_name: Some("Acme".to_string()),
        category_id: CategoryId::new(2),
        category_name: Some("Tools".to_string()),
    }
}

pub(crate) fn order(id: i32, quantity: u32, product_id: i32) -> Order {
    Order {
        order_id: OrderId::new(id),
        ordered_quantity: quantity,
        ordered_date: None,
        delivery_date: None,
        product_id: ProductId::new(product_id),
        product_name: Some("Widget".to_string()),
    }
}

pub(crate) fn server_error(path: &'static str) -> ApiError {
    ApiError::Status {
        path,
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}
