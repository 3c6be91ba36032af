use diesel::prelude::*;

use crate::domain::invoice::{Invoice as DomainInvoice, InvoiceSource, InvoiceSourceLine};
use crate::models::invoice::{Invoice as DbInvoice, NewInvoice as DbNewInvoice};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, InvoiceReader, InvoiceWriter};

fn find_invoice(
    conn: &mut SqliteConnection,
    order_id: i32,
) -> QueryResult<Option<DbInvoice>> {
    use crate::schema::invoices;

    invoices::table
        .filter(invoices::order_id.eq(order_id))
        .first::<DbInvoice>(conn)
        .optional()
}

impl InvoiceReader for DieselRepository {
    fn get_invoice_by_order(&self, order_id: i32) -> RepositoryResult<Option<DomainInvoice>> {
        let mut conn = self.conn()?;
        Ok(find_invoice(&mut conn, order_id)?.map(DomainInvoice::from))
    }

    fn load_invoice_source(&self, order_id: i32) -> RepositoryResult<Option<InvoiceSource>> {
        use crate::schema::{customers, order_items, orders, products};

        let mut conn = self.conn()?;

        let header = orders::table
            .inner_join(customers::table)
            .filter(orders::id.eq(order_id))
            .select((
                orders::id,
                orders::customer_id,
                customers::name,
                orders::created_at,
            ))
            .first::<(i32, i32, String, chrono::NaiveDateTime)>(&mut conn)
            .optional()?;

        let Some((order_id, customer_id, customer_name, order_date)) = header else {
            return Ok(None);
        };

        // Flat join of lines to product tax fields; the document structure is
        // rebuilt in memory.
        let rows = order_items::table
            .inner_join(products::table)
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::id.asc())
            .select((
                products::name,
                products::hsn,
                order_items::quantity,
                order_items::negotiated_price,
                products::cgst,
                products::sgst,
                products::cess,
            ))
            .load::<(String, String, i32, f64, f64, f64, f64)>(&mut conn)?;

        let lines = rows
            .into_iter()
            .map(
                |(product_name, hsn, quantity, negotiated_price, cgst, sgst, cess)| {
                    InvoiceSourceLine {
                        product_name,
                        hsn,
                        quantity,
                        negotiated_price,
                        cgst,
                        sgst,
                        cess,
                    }
                },
            )
            .collect();

        Ok(Some(InvoiceSource {
            order_id,
            customer_id,
            customer_name,
            order_date,
            lines,
        }))
    }
}

impl InvoiceWriter for DieselRepository {
    fn get_or_allocate_invoice(&self, order_id: i32) -> RepositoryResult<DomainInvoice> {
        use crate::schema::{invoice_sequence, invoices, orders};

        let mut conn = self.conn()?;

        // Sequence draw and insert share one transaction so an aborted
        // allocation never leaks a half-created invoice. The transaction
        // takes the write lock up front: a deferred one would start on the
        // lookup SELECT and a losing concurrent allocator would fail with
        // SQLITE_BUSY on upgrade instead of seeing the winner's row. A race
        // that still slips through surfaces as a unique violation on
        // order_id, in which case the winner's row is returned.
        conn.immediate_transaction::<DomainInvoice, RepositoryError, _>(|conn| {
            if let Some(existing) = find_invoice(conn, order_id)? {
                return Ok(existing.into());
            }

            let order_created_at = orders::table
                .filter(orders::id.eq(order_id))
                .select(orders::created_at)
                .first::<chrono::NaiveDateTime>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let sequence = diesel::insert_into(invoice_sequence::table)
                .default_values()
                .returning(invoice_sequence::id)
                .get_result::<i32>(conn)?;

            let invoice_number =
                DomainInvoice::format_number(order_id, order_created_at, sequence);

            let new_invoice = DbNewInvoice {
                order_id,
                invoice_number: &invoice_number,
                invoice_date: chrono::Local::now().naive_utc(),
            };

            let inserted = diesel::insert_into(invoices::table)
                .values(&new_invoice)
                .get_result::<DbInvoice>(conn);

            match inserted {
                Ok(row) => Ok(row.into()),
                // Someone else allocated between our lookup and insert.
                Err(diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                )) => {
                    let existing =
                        find_invoice(conn, order_id)?.ok_or(RepositoryError::Conflict)?;
                    Ok(existing.into())
                }
                Err(other) => Err(other.into()),
            }
        })
    }
}
