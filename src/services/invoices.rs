use crate::pdf::{render_invoice, InvoiceDocument, InvoiceLine};
use crate::pricing;
use crate::repository::{InvoiceReader, InvoiceWriter};
use crate::services::{ServiceError, ServiceResult};

/// A rendered invoice ready to send as an attachment.
pub struct InvoicePdf {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Produces the delivery-challan PDF for an order.
///
/// The first call allocates an invoice number; every later call re-renders
/// under the same number, so downloading twice never burns a second one.
pub fn generate_invoice_pdf<R>(repo: &R, order_id: i32) -> ServiceResult<InvoicePdf>
where
    R: InvoiceReader + InvoiceWriter + ?Sized,
{
    let source = repo
        .load_invoice_source(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    // An item-less order has nothing to invoice; treated the same as a
    // missing order, before any number is allocated.
    if source.lines.is_empty() {
        return Err(ServiceError::NotFound);
    }

    let invoice = repo
        .get_or_allocate_invoice(order_id)
        .map_err(ServiceError::from)?;

    let mut lines = Vec::with_capacity(source.lines.len());
    let mut grand_total = 0.0;
    for line in &source.lines {
        let totals = pricing::line_totals(
            line.negotiated_price,
            line.quantity,
            line.cgst,
            line.sgst,
            line.cess,
        )
        .map_err(|err| ServiceError::Form(err.to_string()))?;

        grand_total += totals.final_price;
        lines.push(InvoiceLine {
            product_name: line.product_name.clone(),
            hsn: line.hsn.clone(),
            quantity: line.quantity,
            taxable_amount: totals.taxable_amount,
            cgst: line.cgst,
            sgst: line.sgst,
            cess: line.cess,
            final_price: totals.final_price,
        });
    }

    let document = InvoiceDocument {
        order_id: source.order_id,
        customer_id: source.customer_id,
        customer_name: source.customer_name,
        order_date: source.order_date,
        invoice_number: invoice.invoice_number,
        invoice_date: invoice.invoice_date,
        lines,
        grand_total,
    };

    let bytes = render_invoice(&document)?;

    Ok(InvoicePdf {
        filename: format!("invoice_order_{order_id}.pdf"),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::invoice::{Invoice, InvoiceSource, InvoiceSourceLine};
    use crate::repository::mock::{MockInvoiceReader, MockInvoiceWriter};
    use crate::repository::errors::RepositoryResult;
    use crate::repository::{InvoiceReader, InvoiceWriter};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .unwrap_or_default()
    }

    struct MockInvoiceRepo {
        reader: MockInvoiceReader,
        writer: MockInvoiceWriter,
    }

    impl MockInvoiceRepo {
        fn new() -> Self {
            Self {
                reader: MockInvoiceReader::new(),
                writer: MockInvoiceWriter::new(),
            }
        }
    }

    impl InvoiceReader for MockInvoiceRepo {
        fn get_invoice_by_order(&self, order_id: i32) -> RepositoryResult<Option<Invoice>> {
            self.reader.get_invoice_by_order(order_id)
        }

        fn load_invoice_source(&self, order_id: i32) -> RepositoryResult<Option<InvoiceSource>> {
            self.reader.load_invoice_source(order_id)
        }
    }

    impl InvoiceWriter for MockInvoiceRepo {
        fn get_or_allocate_invoice(&self, order_id: i32) -> RepositoryResult<Invoice> {
            self.writer.get_or_allocate_invoice(order_id)
        }
    }

    fn sample_source(lines: Vec<InvoiceSourceLine>) -> InvoiceSource {
        InvoiceSource {
            order_id: 12,
            customer_id: 3,
            customer_name: "Sharma Kirana".to_string(),
            order_date: fixed_datetime(),
            lines,
        }
    }

    fn sample_line() -> InvoiceSourceLine {
        InvoiceSourceLine {
            product_name: "Parle-G".to_string(),
            hsn: "1905".to_string(),
            quantity: 2,
            negotiated_price: 59.0,
            cgst: 9.0,
            sgst: 9.0,
            cess: 0.0,
        }
    }

    #[test]
    fn missing_order_maps_to_not_found() {
        let mut repo = MockInvoiceRepo::new();

        repo.reader
            .expect_load_invoice_source()
            .times(1)
            .returning(|_| Ok(None));

        let result = generate_invoice_pdf(&repo, 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn itemless_order_is_rejected_before_allocating_a_number() {
        let mut repo = MockInvoiceRepo::new();

        repo.reader
            .expect_load_invoice_source()
            .times(1)
            .returning(|_| Ok(Some(sample_source(Vec::new()))));
        // No expectation on the writer: allocation must not happen.

        let result = generate_invoice_pdf(&repo, 12);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn renders_pdf_under_the_allocated_number() {
        let mut repo = MockInvoiceRepo::new();

        repo.reader
            .expect_load_invoice_source()
            .times(1)
            .returning(|_| Ok(Some(sample_source(vec![sample_line()]))));
        repo.writer
            .expect_get_or_allocate_invoice()
            .times(1)
            .returning(|order_id| {
                Ok(Invoice {
                    order_id,
                    invoice_number: "INV-12-20250314-000001".to_string(),
                    invoice_date: fixed_datetime(),
                })
            });

        let pdf = generate_invoice_pdf(&repo, 12).expect("expected success");

        assert_eq!(pdf.filename, "invoice_order_12.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));
    }
}
