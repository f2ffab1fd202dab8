//! Order lookups.

use tracing::warn;

use crate::{
    api::{ApiError, InventoryApi},
    domain::{
        lookup::{Lookup, LookupError},
        orders::models::{Order, OrderId},
    },
};

/// Lists every order.
///
/// # Errors
///
/// Propagates the API failure.
pub async fn list_orders(api: &dyn InventoryApi) -> Result<Vec<Order>, ApiError> {
    api.list_orders().await
}

/// Finds an order by the id typed into a search box.
///
/// # Errors
///
/// Returns a [`LookupError`] whose text is the user-visible message.
pub async fn find_order(
    api: &dyn InventoryApi,
    order_id: &str,
) -> Result<Lookup<Order>, LookupError> {
    let order_id = order_id.trim();

    if order_id.is_empty() {
        return Err(LookupError::Blank("Order ID cannot be blank."));
    }

    let Ok(order_id) = order_id.parse::<OrderId>() else {
        return Err(LookupError::Invalid("Order not found."));
    };

    let order = api.fetch_order(order_id).await.map_err(|error| {
        warn!(%order_id, %error, "failed to fetch order");

        LookupError::failed("Order not found.")(error)
    })?;

    let message = format!("Order fetched successfully with ID: {}", order.order_id);

    Ok(Lookup::new(order, message))
}
