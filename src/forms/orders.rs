use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{NewOrder, NewOrderItem, OrderStatus};

/// Result type returned by the order form helpers.
pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while converting order payloads.
#[derive(Debug, Error)]
pub enum OrderFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// An order was submitted without any items.
    #[error("order must contain at least one item")]
    EmptyItems,
    /// The submitted status is not part of the vocabulary.
    #[error("unknown order status `{value}`")]
    UnknownStatus { value: String },
}

/// One line of an incoming order payload. `unit_price` is deliberately
/// absent: catalog prices are never trusted from the client.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct OrderItemPayload {
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    /// Tax-inclusive agreed unit price; defaults to 0 (not negotiated yet).
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub negotiated_price: f64,
}

impl From<OrderItemPayload> for NewOrderItem {
    fn from(value: OrderItemPayload) -> Self {
        Self {
            product_id: value.product_id,
            quantity: value.quantity,
            negotiated_price: value.negotiated_price,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderForm {
    pub customer_id: i32,
    pub salesperson_id: Option<i32>,
    pub notes: Option<String>,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItemPayload>,
}

impl CreateOrderForm {
    /// Validate the whole payload and convert it into a domain `NewOrder`.
    /// Nothing is written anywhere until this has succeeded.
    pub fn into_new_order(self) -> OrderFormResult<NewOrder> {
        if self.items.is_empty() {
            return Err(OrderFormError::EmptyItems);
        }
        self.validate()?;

        let items = self.items.into_iter().map(NewOrderItem::from).collect();

        let mut new_order = NewOrder::new(self.customer_id, items);

        if let Some(salesperson_id) = self.salesperson_id {
            new_order = new_order.with_salesperson_id(salesperson_id);
        }

        if let Some(notes) = self.notes.filter(|notes| !notes.trim().is_empty()) {
            new_order = new_order.with_notes(notes);
        }

        Ok(new_order)
    }
}

/// Body of `PUT /orders/{id}/items`. An empty set is legal and clears the
/// order; the whole batch is validated before any row is touched.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceItemsForm {
    #[validate(nested)]
    pub items: Vec<OrderItemPayload>,
}

impl ReplaceItemsForm {
    pub fn into_items(self) -> OrderFormResult<Vec<NewOrderItem>> {
        self.validate()?;
        Ok(self.items.into_iter().map(NewOrderItem::from).collect())
    }
}

/// Body of `PATCH /orders/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    pub status: String,
}

impl UpdateStatusForm {
    pub fn into_status(self) -> OrderFormResult<OrderStatus> {
        self.status
            .parse()
            .map_err(|_| OrderFormError::UnknownStatus { value: self.status })
    }
}

/// Body of `PATCH /orders/{id}/note`.
#[derive(Debug, Deserialize)]
pub struct UpdateNotesForm {
    pub note: Option<String>,
}

/// Body of `PATCH /orders/{id}/items/{product_id}/price`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemPriceForm {
    #[validate(range(min = 0.0))]
    pub negotiated_price: f64,
}
