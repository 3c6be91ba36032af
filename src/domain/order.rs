use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states an order can be in.
///
/// `Fulfilled` and `Cancelled` are terminal in practice, but the data layer
/// deliberately enforces only the vocabulary, not the transitions.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order has been created and awaits fulfilment.
    Pending,
    /// Order has been delivered and counts towards sales rollups.
    Fulfilled,
    /// Order has been cancelled and is excluded from sales rollups.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    /// Canonical string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Fulfilled => "Fulfilled",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderStatusError(pub String);

impl fmt::Display for ParseOrderStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status `{}`", self.0)
    }
}

impl std::error::Error for ParseOrderStatusError {}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Fulfilled" => Ok(Self::Fulfilled),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

/// Domain representation of an order together with its line items.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Customer the order was placed for.
    pub customer_id: i32,
    /// Salesperson who took the order, if any.
    pub salesperson_id: Option<i32>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Free-form operator notes.
    pub notes: Option<String>,
    /// Line items belonging to the order, in insertion order.
    pub items: Vec<OrderItem>,
    /// Timestamp set at creation, immutable afterwards.
    pub created_at: NaiveDateTime,
}

/// A single order line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: i32,
    /// Ordered quantity, always >= 1.
    pub quantity: i32,
    /// Catalog price captured from the product at insertion time.
    pub unit_price: f64,
    /// Tax-inclusive price agreed for this line; 0 means "not negotiated yet"
    /// and must be overwritten before invoicing for the tax math to hold.
    pub negotiated_price: f64,
}

/// Payload required to insert a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i32,
    pub salesperson_id: Option<i32>,
    pub notes: Option<String>,
    pub status: OrderStatus,
    /// Line items to insert together with the order, atomically.
    pub items: Vec<NewOrderItem>,
    pub created_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a pending order payload with the current timestamp.
    pub fn new(customer_id: i32, items: Vec<NewOrderItem>) -> Self {
        Self {
            customer_id,
            salesperson_id: None,
            notes: None,
            status: OrderStatus::default(),
            items,
            created_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach the salesperson who took the order.
    pub fn with_salesperson_id(mut self, salesperson_id: i32) -> Self {
        self.salesperson_id = Some(salesperson_id);
        self
    }

    /// Attach operator notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A line item as submitted by a client. The catalog `unit_price` is not
/// part of the payload; it is resolved server-side at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub negotiated_price: f64,
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional customer filter.
    pub customer_id: Option<i32>,
    /// Optional salesperson filter.
    pub salesperson_id: Option<i32>,
}

impl OrderListQuery {
    /// Construct a query matching every order, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter the results by customer identifier.
    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Filter the results by salesperson identifier.
    pub fn salesperson_id(mut self, salesperson_id: i32) -> Self {
        self.salesperson_id = Some(salesperson_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Fulfilled,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_vocabulary() {
        let err = "Shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.0, "Shipped");
    }
}
