//! Terminal rendering of notices, field errors and tables.

use std::io;

use inventrak_app::{
    domain::{
        orders::models::Order,
        products::models::{Brand, Category, Product},
        reports::{CustomerReport, models::SalesReportRow},
    },
    forms::{ErrorMap, Notice},
};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

/// Errors raised while writing command output.
#[derive(Debug, Error)]
pub(crate) enum RenderError {
    /// The output stream refused the write.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Writes a plain line of text.
pub(crate) fn line(out: &mut impl io::Write, text: &str) -> Result<(), RenderError> {
    writeln!(out, "{text}")?;

    Ok(())
}

/// Writes a notice as it is.
pub(crate) fn notice(out: &mut impl io::Write, notice: &Notice) -> Result<(), RenderError> {
    line(out, notice.message())
}

/// Writes one `field: message` line per error.
pub(crate) fn field_errors(out: &mut impl io::Write, errors: &ErrorMap) -> Result<(), RenderError> {
    for (field, message) in errors.iter() {
        writeln!(out, "{field}: {message}")?;
    }

    Ok(())
}

/// Writes an advisory check result.
pub(crate) fn warning(
    out: &mut impl io::Write,
    field: &str,
    message: &str,
) -> Result<(), RenderError> {
    writeln!(out, "warning: {field}: {message}")?;

    Ok(())
}

pub(crate) fn products(out: &mut impl io::Write, products: &[Product]) -> Result<(), RenderError> {
    if products.is_empty() {
        return line(out, "no products found");
    }

    let mut builder = Builder::default();

    builder.push_record([
        "ID", "Name", "Stock", "Price", "Barcode", "Brand", "Category",
    ]);

    for product in products {
        builder.push_record([
            product.product_id.to_string(),
            product.product_name.clone(),
            product.stock_available.to_string(),
            product.price.to_string(),
            product.barcode.clone(),
            labelled(product.brand_name.as_deref(), product.brand_id),
            labelled(product.category_name.as_deref(), product.category_id),
        ]);
    }

    write_table(out, builder, &[0, 2, 3])
}

pub(crate) fn brands(out: &mut impl io::Write, brands: &[Brand]) -> Result<(), RenderError> {
    if brands.is_empty() {
        return line(out, "no brands found");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Brand"]);

    for brand in brands {
        builder.push_record([brand.brand_id.to_string(), brand.brand_name.clone()]);
    }

    write_table(out, builder, &[0])
}

pub(crate) fn categories(
    out: &mut impl io::Write,
    categories: &[Category],
) -> Result<(), RenderError> {
    if categories.is_empty() {
        return line(out, "no categories found");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Category"]);

    for category in categories {
        builder.push_record([
            category.category_id.to_string(),
            category.category_name.clone(),
        ]);
    }

    write_table(out, builder, &[0])
}

pub(crate) fn orders(out: &mut impl io::Write, orders: &[Order]) -> Result<(), RenderError> {
    if orders.is_empty() {
        return line(out, "no orders found");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Quantity", "Ordered", "Delivery", "Product"]);

    for order in orders {
        builder.push_record([
            order.order_id.to_string(),
            order.ordered_quantity.to_string(),
            order
                .ordered_date
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
            order
                .delivery_date
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
            labelled(order.product_name.as_deref(), order.product_id),
        ]);
    }

    write_table(out, builder, &[0, 1])
}

/// Customer report, headed by the customer's name.
pub(crate) fn customer_report(
    out: &mut impl io::Write,
    report: &CustomerReport,
) -> Result<(), RenderError> {
    let Some(user_name) = report.user_name.as_deref() else {
        return line(
            out,
            &format!("no orders found for customer {}", report.customer_id),
        );
    };

    writeln!(out, "Customer {} ({user_name})", report.customer_id)?;

    let mut builder = Builder::default();

    builder.push_record(["Product ID", "Product", "Price", "Quantity", "Amount Paid"]);

    for row in &report.rows {
        builder.push_record([
            row.product_id.to_string(),
            row.product_name.clone(),
            row.price.to_string(),
            row.ordered_quantity.to_string(),
            row.amount_paid.to_string(),
        ]);
    }

    write_table(out, builder, &[0, 2, 3, 4])
}

pub(crate) fn sales_report(
    out: &mut impl io::Write,
    rows: &[SalesReportRow],
) -> Result<(), RenderError> {
    if rows.is_empty() {
        return line(out, "no sales recorded");
    }

    let mut builder = Builder::default();

    builder.push_record([
        "Product ID",
        "Product",
        "Brand",
        "Category",
        "Stock",
        "Price",
        "Customer ID",
        "Order ID",
        "Quantity",
        "Amount Paid",
    ]);

    for row in rows {
        builder.push_record([
            row.product_id.to_string(),
            row.product_name.clone(),
            row.brand.clone(),
            row.category.clone(),
            row.stock_available.to_string(),
            row.price.to_string(),
            row.customer_id.to_string(),
            row.order_id.to_string(),
            row.ordered_quantity.to_string(),
            row.amount_paid.to_string(),
        ]);
    }

    write_table(out, builder, &[0, 4, 5, 6, 7, 8, 9])
}

/// Name when the backend sent one, the bare id otherwise.
fn labelled(name: Option<&str>, id: impl ToString) -> String {
    name.map_or_else(|| id.to_string(), ToString::to_string)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    numeric_columns: &[usize],
) -> Result<(), RenderError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);

    for &column in numeric_columns {
        table.modify(Columns::new(column..=column), Alignment::right());
    }

    writeln!(out, "{table}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use inventrak_app::domain::{
        customers::models::CustomerId,
        products::models::{BrandId, CategoryId, ProductId},
        reports::models::CustomerOrderReportRow,
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn widget() -> Product {
        Product {
            product_id: ProductId::new(7),
            product_name: "Widget".to_string(),
            stock_available: 12,
            price: Decimal::new(1999, 2),
            barcode: "ABCD1234".to_string(),
            brand_id: BrandId::new(1),
            brand_name: Some("Acme".to_string()),
            category_id: CategoryId::new(2),
            category_name: None,
        }
    }

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> Result<(), RenderError>) -> TestResult<String> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn product_table_lists_every_column() -> TestResult {
        let output = rendered(|out| products(out, &[widget()]))?;

        for expected in ["Widget", "12", "19.99", "ABCD1234", "Acme"] {
            assert!(output.contains(expected), "missing {expected} in {output}");
        }

        Ok(())
    }

    #[test]
    fn missing_names_fall_back_to_ids() {
        assert_eq!(labelled(Some("Acme"), BrandId::new(1)), "Acme");
        assert_eq!(labelled(None, CategoryId::new(2)), "2");
    }

    #[test]
    fn empty_lists_say_so() -> TestResult {
        assert_eq!(rendered(|out| products(out, &[]))?, "no products found\n");
        assert_eq!(rendered(|out| orders(out, &[]))?, "no orders found\n");

        Ok(())
    }

    #[test]
    fn field_errors_print_one_per_line() -> TestResult {
        let mut errors = ErrorMap::new();

        errors.insert("price", "Price must be greater than 0.");
        errors.insert("barcode", "Bar code cannot be blank.");

        assert_eq!(
            rendered(|out| field_errors(out, &errors))?,
            "barcode: Bar code cannot be blank.\nprice: Price must be greater than 0.\n"
        );

        Ok(())
    }

    #[test]
    fn customer_report_is_headed_by_the_customer() -> TestResult {
        let report = CustomerReport {
            customer_id: CustomerId::new(3),
            user_name: Some("alice".to_string()),
            rows: vec![CustomerOrderReportRow {
                customer_id: CustomerId::new(3),
                user_name: "alice".to_string(),
                product_id: ProductId::new(7),
                product_name: "Widget".to_string(),
                price: Decimal::new(5, 0),
                ordered_quantity: 2,
                amount_paid: Decimal::new(10, 0),
            }],
        };

        let output = rendered(|out| customer_report(out, &report))?;

        assert!(
            output.starts_with("Customer 3 (alice)\n"),
            "unexpected heading in {output}"
        );
        assert!(output.contains("Widget"), "missing product in {output}");

        Ok(())
    }
}
