//! Report Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    customers::models::CustomerId, orders::models::OrderId, products::models::ProductId,
};

/// One ordered product of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderReportRow {
    /// Customer who ordered.
    pub customer_id: CustomerId,
    /// Customer user name.
    pub user_name: String,
    /// Ordered product.
    pub product_id: ProductId,
    /// Product name.
    pub product_name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units ordered.
    pub ordered_quantity: u32,
    /// Total charged for the line.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
}

/// One order line of the sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRow {
    /// Sold product.
    pub product_id: ProductId,
    /// Product name.
    pub product_name: String,
    /// Brand name.
    pub brand: String,
    /// Category name.
    pub category: String,
    /// Units left in stock.
    pub stock_available: u32,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Buying customer.
    pub customer_id: CustomerId,
    /// Order the line belongs to.
    pub order_id: OrderId,
    /// Units ordered.
    pub ordered_quantity: u32,
    /// Total charged for the line.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sales_row_decodes_float_amounts() -> TestResult {
        let row: SalesReportRow = serde_json::from_value(json!({
            "productId": 7,
            "productName": "Widget",
            "brand": "Acme",
            "category": "Tools",
            "stockAvailable": 3,
            "price": 9.5,
            "customerId": 2,
            "orderId": 5,
            "orderedQuantity": 2,
            "amountPaid": 19.0,
        }))?;

        assert_eq!(row.amount_paid, Decimal::new(19, 0));
        assert_eq!(row.order_id, OrderId::new(5));

        Ok(())
    }
}
