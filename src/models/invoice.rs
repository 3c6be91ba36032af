use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::invoice::Invoice as DomainInvoice;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct Invoice {
    pub id: i32,
    pub order_id: i32,
    pub invoice_number: String,
    pub invoice_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice<'a> {
    pub order_id: i32,
    pub invoice_number: &'a str,
    pub invoice_date: NaiveDateTime,
}

impl From<Invoice> for DomainInvoice {
    fn from(value: Invoice) -> Self {
        Self {
            order_id: value.order_id,
            invoice_number: value.invoice_number,
            invoice_date: value.invoice_date,
        }
    }
}
