//! Order Models

use serde::{Deserialize, Serialize};

use crate::{
    domain::{dates::BackendDate, products::models::ProductId},
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend id.
    pub order_id: OrderId,
    /// Units ordered.
    pub ordered_quantity: u32,
    /// Day the order was placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_date: Option<BackendDate>,
    /// Day the order is due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<BackendDate>,
    /// Ordered product.
    pub product_id: ProductId,
    /// Product name, when the backend joins it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// New Order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Units ordered, at least one.
    pub ordered_quantity: u32,
    /// Selected product.
    pub product_id: ProductId,
}

impl NewOrder {
    /// Attach an identifier, turning the payload into a full record.
    #[must_use]
    pub fn with_id(self, order_id: OrderId) -> Order {
        Order {
            order_id,
            ordered_quantity: self.ordered_quantity,
            ordered_date: None,
            delivery_date: None,
            product_id: self.product_id,
            product_name: None,
        }
    }
}

/// Order change payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    /// Order being changed.
    pub order_id: OrderId,
    /// New quantity.
    pub ordered_quantity: u32,
    /// New product.
    pub product_id: ProductId,
}
