//! Order drafts and their validator.

use crate::{
    domain::{
        orders::models::{NewOrder, Order, OrderId, OrderUpdate},
        products::models::ProductId,
        rules::{self, Numeric},
    },
    forms::{Draft, ErrorMap, FormField},
};

/// Inputs of the order forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    /// Units ordered.
    OrderedQuantity,
    /// Product selection.
    ProductId,
}

impl FormField for OrderField {
    const ALL: &'static [Self] = &[Self::OrderedQuantity, Self::ProductId];

    fn key(self) -> &'static str {
        match self {
            Self::OrderedQuantity => "orderedQuantity",
            Self::ProductId => "productId",
        }
    }
}

/// Raw inputs of an order. An empty product id means nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    /// Units ordered, at least one.
    pub ordered_quantity: String,
    /// Selected product id.
    pub product_id: String,
}

impl From<&Order> for OrderDraft {
    fn from(order: &Order) -> Self {
        Self {
            ordered_quantity: order.ordered_quantity.to_string(),
            product_id: order.product_id.to_string(),
        }
    }
}

impl Draft for OrderDraft {
    type Field = OrderField;
    type Payload = NewOrder;

    fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::OrderedQuantity => &self.ordered_quantity,
            OrderField::ProductId => &self.product_id,
        }
    }

    fn value_mut(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::OrderedQuantity => &mut self.ordered_quantity,
            OrderField::ProductId => &mut self.product_id,
        }
    }

    fn parse(&self) -> Result<NewOrder, ErrorMap> {
        let mut errors = ErrorMap::new();

        let ordered_quantity = match rules::whole_number(&self.ordered_quantity) {
            Numeric::Value(quantity) if quantity >= 1 => u32::try_from(quantity).ok(),
            Numeric::Blank | Numeric::Malformed | Numeric::Value(_) => None,
        };

        if ordered_quantity.is_none() {
            errors.insert("orderedQuantity", "Ordered quantity must be at least 1.");
        }

        let product_id = self.product_id.parse::<ProductId>().ok();

        if product_id.is_none() {
            errors.insert("productId", "Please select a product.");
        }

        match (ordered_quantity, product_id) {
            (Some(ordered_quantity), Some(product_id)) => Ok(NewOrder {
                ordered_quantity,
                product_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw inputs of an existing order; `order_id` is unset until fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderEditDraft {
    /// The fetched order, if any.
    pub order_id: Option<OrderId>,
    /// Editable inputs.
    pub fields: OrderDraft,
}

impl From<&Order> for OrderEditDraft {
    fn from(order: &Order) -> Self {
        Self {
            order_id: Some(order.order_id),
            fields: OrderDraft::from(order),
        }
    }
}

impl Draft for OrderEditDraft {
    type Field = OrderField;
    type Payload = OrderUpdate;

    fn value(&self, field: OrderField) -> &str {
        self.fields.value(field)
    }

    fn value_mut(&mut self, field: OrderField) -> &mut String {
        self.fields.value_mut(field)
    }

    fn parse(&self) -> Result<OrderUpdate, ErrorMap> {
        let order = self.fields.parse()?;

        match self.order_id {
            Some(order_id) => Ok(OrderUpdate {
                order_id,
                ordered_quantity: order.ordered_quantity,
                product_id: order.product_id,
            }),
            None => Err(ErrorMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_at_least_one() {
        for quantity in ["", "0", "-4", "two", "1.5"] {
            let draft = OrderDraft {
                ordered_quantity: quantity.to_string(),
                product_id: "7".to_string(),
            };

            assert_eq!(
                draft.validate().get("orderedQuantity"),
                Some("Ordered quantity must be at least 1."),
                "quantity {quantity:?}"
            );
        }
    }

    #[test]
    fn a_product_must_be_selected() {
        let draft = OrderDraft {
            ordered_quantity: "2".to_string(),
            product_id: String::new(),
        };

        let errors = draft.validate();

        assert_eq!(errors.get("productId"), Some("Please select a product."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_draft_parses() {
        let draft = OrderDraft {
            ordered_quantity: " 3 ".to_string(),
            product_id: "7".to_string(),
        };

        assert_eq!(
            draft.parse(),
            Ok(NewOrder {
                ordered_quantity: 3,
                product_id: ProductId::new(7),
            })
        );
    }

    #[test]
    fn edit_draft_includes_the_order_id() {
        let draft = OrderEditDraft {
            order_id: Some(OrderId::new(5)),
            fields: OrderDraft {
                ordered_quantity: "3".to_string(),
                product_id: "7".to_string(),
            },
        };

        assert_eq!(
            draft.parse(),
            Ok(OrderUpdate {
                order_id: OrderId::new(5),
                ordered_quantity: 3,
                product_id: ProductId::new(7),
            })
        );
    }
}
