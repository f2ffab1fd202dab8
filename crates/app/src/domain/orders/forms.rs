//! Add and update order forms.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    api::InventoryApi,
    domain::{
        orders::{
            models::OrderId,
            validation::{OrderDraft, OrderEditDraft, OrderField},
        },
        products::models::{Product, ProductId},
    },
    forms::{Draft, EntityForm, ErrorMap, SubmitError},
};

/// Error for a product id missing from the loaded list. An empty list (one
/// that failed to load) accepts any id.
fn product_selection_errors(products: &[Product], draft: &OrderDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let unlisted = draft
        .product_id
        .trim()
        .parse::<ProductId>()
        .is_ok_and(|product_id| {
            !products.is_empty()
                && !products
                    .iter()
                    .any(|product| product.product_id == product_id)
        });

    if unlisted {
        errors.insert("productId", "Please select a product.");
    }

    errors
}

async fn mount_products<D: Draft>(form: &mut EntityForm<D>, products: &mut Vec<Product>) {
    form.state_mut().begin_loading();

    let api = Arc::clone(form.api());

    match form.guard(async move { api.list_products().await }).await {
        Some(Ok(loaded)) => *products = loaded,
        Some(Err(error)) => warn!(%error, "failed to load products"),
        None => {}
    }

    form.state_mut().finish_loading();
}

/// Places orders.
#[derive(Debug)]
pub struct AddOrderForm {
    form: EntityForm<OrderDraft>,
    products: Vec<Product>,
}

impl AddOrderForm {
    /// Opens an empty form.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            form: EntityForm::new(api, OrderDraft::default()),
            products: Vec::new(),
        }
    }

    /// Loads the product pick list.
    pub async fn mount(&mut self) {
        mount_products(&mut self.form, &mut self.products).await;
    }

    /// Product pick list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Underlying form.
    pub fn form(&self) -> &EntityForm<OrderDraft> {
        &self.form
    }

    /// Underlying form, for edits.
    pub fn form_mut(&mut self) -> &mut EntityForm<OrderDraft> {
        &mut self.form
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Places the order. On success the draft is reset.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when nothing was sent.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let rejected = product_selection_errors(&self.products, self.form.state().draft());
        let created = self
            .form
            .submit_checked_with(rejected, |api, order| async move {
                api.create_order(&order).await
            })
            .await?;

        let state = self.form.state_mut();

        match created {
            Ok(order) => {
                info!(order_id = %order.order_id, "order created");

                state.submit_succeeded_and_reset(format!(
                    "Order successfully created with ID: {}",
                    order.order_id
                ));
            }
            Err(error) => {
                warn!(%error, "failed to create order");

                state.submit_failed("Failed to create order.");
            }
        }

        Ok(())
    }

    /// Closes the form.
    pub fn close(&mut self) {
        self.form.close();
    }
}

/// Changes the quantity or product of an existing order.
#[derive(Debug)]
pub struct UpdateOrderForm {
    form: EntityForm<OrderEditDraft>,
    products: Vec<Product>,
    fetch_error: Option<&'static str>,
}

impl UpdateOrderForm {
    /// Opens a form with nothing fetched.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            form: EntityForm::new(api, OrderEditDraft::default()),
            products: Vec::new(),
            fetch_error: None,
        }
    }

    /// Loads the product pick list.
    pub async fn mount(&mut self) {
        mount_products(&mut self.form, &mut self.products).await;
    }

    /// Product pick list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Underlying form.
    pub fn form(&self) -> &EntityForm<OrderEditDraft> {
        &self.form
    }

    /// Underlying form, for edits.
    pub fn form_mut(&mut self) -> &mut EntityForm<OrderEditDraft> {
        &mut self.form
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Whether an order has been fetched.
    pub fn is_loaded(&self) -> bool {
        self.form.state().draft().order_id.is_some()
    }

    /// Why the last fetch produced nothing.
    pub fn fetch_error(&self) -> Option<&'static str> {
        self.fetch_error
    }

    /// Fetches the order to edit, replacing the draft.
    ///
    /// A blank id is refused without a request; an id that is not a number
    /// cannot name an order and fails like a missing one.
    pub async fn fetch(&mut self, order_id: &str) {
        let order_id = order_id.trim();

        if order_id.is_empty() {
            self.fetch_error = Some("Order ID cannot be blank.");

            return;
        }

        let fetched = match order_id.parse::<OrderId>() {
            Ok(order_id) => {
                let api = Arc::clone(self.form.api());
                let Some(fetched) = self
                    .form
                    .guard(async move { api.fetch_order(order_id).await })
                    .await
                else {
                    return;
                };

                fetched.map_err(|error| warn!(%order_id, %error, "failed to fetch order"))
            }
            Err(error) => {
                warn!(order_id, %error, "order id is not a number");

                Err(())
            }
        };

        match fetched {
            Ok(order) => {
                self.fetch_error = None;
                self.form.state_mut().replace_draft(OrderEditDraft::from(&order));
            }
            Err(()) => {
                self.fetch_error = Some("Failed to fetch order.");
                self.form.state_mut().replace_draft(OrderEditDraft::default());
            }
        }
    }

    /// Saves the edited order. The draft is kept for further edits.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotLoaded`] before an order was fetched, and
    /// any other [`SubmitError`] when nothing was sent.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let Some(order_id) = self.form.state().draft().order_id else {
            return Err(SubmitError::NotLoaded);
        };

        let rejected =
            product_selection_errors(&self.products, &self.form.state().draft().fields);
        let updated = self
            .form
            .submit_checked_with(rejected, |api, order| async move {
                api.update_order(&order).await
            })
            .await?;

        let state = self.form.state_mut();

        match updated {
            Ok(()) => {
                info!(%order_id, "order updated");

                state.submit_succeeded(format!("Order updated successfully for ID: {order_id}"));
            }
            Err(error) => {
                warn!(%order_id, %error, "failed to update order");

                state.submit_failed("Failed to update order.");
            }
        }

        Ok(())
    }

    /// Closes the form.
    pub fn close(&mut self) {
        self.form.close();
    }
}
