use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderItem as DomainOrderItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub salesperson_id: Option<i32>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub negotiated_price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub salesperson_id: Option<i32>,
    pub status: &'a str,
    pub notes: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub negotiated_price: f64,
}

impl Order {
    pub fn into_domain(self, items: Vec<OrderItem>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            customer_id: self.customer_id,
            salesperson_id: self.salesperson_id,
            status: self.status.parse().unwrap_or_default(),
            notes: self.notes,
            items: items.into_iter().map(OrderItem::into_domain).collect(),
            created_at: self.created_at,
        }
    }
}

impl OrderItem {
    pub fn into_domain(self) -> DomainOrderItem {
        DomainOrderItem {
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            negotiated_price: self.negotiated_price,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from(value: (Order, Vec<OrderItem>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            salesperson_id: value.salesperson_id,
            status: value.status.as_str(),
            notes: value.notes.as_deref(),
            created_at: value.created_at,
        }
    }
}

impl NewOrderItem {
    /// Build an insertable row. `unit_price` comes from the product catalog,
    /// never from the client payload.
    pub fn from_domain(
        order_id: i32,
        unit_price: f64,
        value: &crate::domain::order::NewOrderItem,
    ) -> Self {
        Self {
            order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            unit_price,
            negotiated_price: value.negotiated_price,
        }
    }
}
