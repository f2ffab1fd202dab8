//! Reports

pub mod models;

use tracing::warn;

use crate::{
    api::InventoryApi,
    domain::{
        customers::models::CustomerId,
        lookup::LookupError,
        reports::models::{CustomerOrderReportRow, SalesReportRow},
    },
};

const CUSTOMER_REPORT_FAILED: &str = "Failed to fetch customer report.";

/// Orders of one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerReport {
    /// Customer the report was generated for.
    pub customer_id: CustomerId,

    /// Taken from the first row; `None` when the report is empty.
    pub user_name: Option<String>,

    /// One row per ordered product.
    pub rows: Vec<CustomerOrderReportRow>,
}

/// Generates the order report of the customer typed into a search box.
///
/// # Errors
///
/// Returns a [`LookupError`] whose text is the user-visible message.
pub async fn customer_report(
    api: &dyn InventoryApi,
    customer_id: &str,
) -> Result<CustomerReport, LookupError> {
    let customer_id = customer_id.trim();

    if customer_id.is_empty() {
        return Err(LookupError::Blank("Customer ID cannot be blank."));
    }

    let Ok(customer_id) = customer_id.parse::<CustomerId>() else {
        return Err(LookupError::Invalid(CUSTOMER_REPORT_FAILED));
    };

    let rows = api
        .customer_order_report(customer_id)
        .await
        .map_err(|error| {
            warn!(%customer_id, %error, "failed to fetch customer report");

            LookupError::failed(CUSTOMER_REPORT_FAILED)(error)
        })?;

    Ok(CustomerReport {
        customer_id,
        user_name: rows.first().map(|row| row.user_name.clone()),
        rows,
    })
}

/// Generates the sales report.
///
/// # Errors
///
/// Returns a [`LookupError`] whose text is the user-visible message.
pub async fn sales_report(api: &dyn InventoryApi) -> Result<Vec<SalesReportRow>, LookupError> {
    api.sales_report().await.map_err(|error| {
        warn!(%error, "failed to generate sales report");

        LookupError::failed("Failed to generate sales report.")(error)
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::{
        api::MockInventoryApi, domain::products::models::ProductId, test::helpers::server_error,
    };

    fn row(user_name: &str, product_id: i32) -> CustomerOrderReportRow {
        CustomerOrderReportRow {
            customer_id: CustomerId::new(2),
            user_name: user_name.to_string(),
            product_id: ProductId::new(product_id),
            product_name: "Widget".to_string(),
            price: Decimal::new(95, 1),
            ordered_quantity: 2,
            amount_paid: Decimal::new(19, 0),
        }
    }

    #[tokio::test]
    async fn customer_name_comes_from_the_first_row() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_customer_order_report()
            .withf(|id| *id == CustomerId::new(2))
            .returning(|_| Ok(vec![row("alice", 7), row("alice", 8)]));

        let report = customer_report(&api, " 2 ").await?;

        assert_eq!(report.user_name.as_deref(), Some("alice"));
        assert_eq!(report.rows.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn blank_customer_id_is_refused_locally() {
        let api = MockInventoryApi::new();

        let result = customer_report(&api, "").await;

        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("Customer ID cannot be blank.".to_string())
        );
    }

    #[tokio::test]
    async fn failed_reports_have_their_own_messages() {
        let mut api = MockInventoryApi::new();

        api.expect_customer_order_report()
            .returning(|_| Err(server_error("/generateCustomerOrderReport")));
        api.expect_sales_report()
            .returning(|| Err(server_error("/generateSalesReport")));

        let customer = customer_report(&api, "2").await.map_err(|e| e.to_string());
        let sales = sales_report(&api).await.map_err(|e| e.to_string());

        assert_eq!(customer, Err("Failed to fetch customer report.".to_string()));
        assert_eq!(sales, Err("Failed to generate sales report.".to_string()));
    }
}
