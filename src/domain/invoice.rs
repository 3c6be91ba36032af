use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An allocated invoice. At most one exists per order and it never changes
/// once written.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Invoice {
    /// Order this invoice belongs to (unique).
    pub order_id: i32,
    /// Number of the form `INV-{order_id}-{YYYYMMDD}-{seq}` where `seq` is a
    /// zero-padded draw from the global invoice sequence.
    pub invoice_number: String,
    /// Timestamp of the first (and only) allocation.
    pub invoice_date: NaiveDateTime,
}

impl Invoice {
    /// Format an invoice number from its parts. `order_date` is the order's
    /// `created_at`, `sequence` the value drawn from the global counter.
    pub fn format_number(order_id: i32, order_date: NaiveDateTime, sequence: i32) -> String {
        format!(
            "INV-{}-{}-{:06}",
            order_id,
            order_date.format("%Y%m%d"),
            sequence
        )
    }
}

/// Everything the renderer needs for one order, already joined to the
/// customer and the products' tax fields.
#[derive(Debug, Clone)]
pub struct InvoiceSource {
    pub order_id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    /// Order creation date, printed in the metadata block.
    pub order_date: NaiveDateTime,
    /// One entry per order line, in insertion order.
    pub lines: Vec<InvoiceSourceLine>,
}

/// A flat joined row of order line and product tax data.
#[derive(Debug, Clone)]
pub struct InvoiceSourceLine {
    pub product_name: String,
    pub hsn: String,
    pub quantity: i32,
    /// Tax-inclusive unit price agreed for this line.
    pub negotiated_price: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub cess: f64,
}
