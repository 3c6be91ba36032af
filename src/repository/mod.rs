use crate::db::{DbConnection, DbPool};
use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::invoice::{Invoice, InvoiceSource};
use crate::domain::order::{NewOrder, NewOrderItem, Order, OrderListQuery, OrderStatus};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::sales::{SalesSummary, SalespersonSales};
use crate::domain::salesperson::{NewSalesperson, Salesperson, UpdateSalesperson};

pub mod errors;

pub mod company;
pub mod customer;
pub mod invoice;
pub mod order;
pub mod product;
pub mod sales;
pub mod salesperson;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over orders and their line items.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
}

/// Write operations over orders. Multi-statement writes run inside a single
/// transaction; any failure rolls the whole operation back.
pub trait OrderWriter {
    /// Insert an order and all of its items atomically. Each item's
    /// `unit_price` is resolved from the product catalog at insertion time.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    /// Delete every existing item of the order, then insert the new set.
    /// Callers must validate the full batch before invoking this.
    fn replace_order_items(&self, order_id: i32, items: &[NewOrderItem])
        -> RepositoryResult<Order>;
    fn update_order_status(&self, order_id: i32, status: OrderStatus) -> RepositoryResult<Order>;
    fn update_order_notes(&self, order_id: i32, notes: Option<&str>) -> RepositoryResult<Order>;
    /// Targeted single-line price correction outside a full replacement.
    fn update_item_price(
        &self,
        order_id: i32,
        product_id: i32,
        negotiated_price: f64,
    ) -> RepositoryResult<()>;
}

/// Read-only operations over invoices.
pub trait InvoiceReader {
    fn get_invoice_by_order(&self, order_id: i32) -> RepositoryResult<Option<Invoice>>;
    /// Fetch the order, customer and line/tax data needed to render the
    /// invoice document. `None` when the order does not exist.
    fn load_invoice_source(&self, order_id: i32) -> RepositoryResult<Option<InvoiceSource>>;
}

/// Invoice allocation.
pub trait InvoiceWriter {
    /// Return the existing invoice for the order or allocate a new one.
    /// Idempotent: repeated calls never mint a second number for an order.
    fn get_or_allocate_invoice(&self, order_id: i32) -> RepositoryResult<Invoice>;
}

/// Read-only operations over the product catalog.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over the product catalog.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
        -> RepositoryResult<Product>;
}

/// Read-only operations over customers.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    /// All customers, or only those assigned to `salesperson_id`.
    fn list_customers(&self, salesperson_id: Option<i32>) -> RepositoryResult<Vec<Customer>>;
}

/// Write operations over customers.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer)
        -> RepositoryResult<Customer>;
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
    /// Move every customer of one salesperson to another. Returns the number
    /// of customers moved.
    fn reassign_customers(&self, from: i32, to: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over salespersons.
pub trait SalespersonReader {
    fn get_salesperson_by_id(&self, id: i32) -> RepositoryResult<Option<Salesperson>>;
    /// Look up by email (case-insensitive) or phone, for login.
    fn get_salesperson_by_identifier(
        &self,
        identifier: &str,
    ) -> RepositoryResult<Option<Salesperson>>;
    /// Active salespersons only; soft-deleted accounts are excluded.
    fn list_salespersons(&self) -> RepositoryResult<Vec<Salesperson>>;
}

/// Write operations over salespersons.
pub trait SalespersonWriter {
    fn create_salesperson(&self, new_salesperson: &NewSalesperson)
        -> RepositoryResult<Salesperson>;
    fn update_salesperson(
        &self,
        salesperson_id: i32,
        updates: &UpdateSalesperson,
    ) -> RepositoryResult<Salesperson>;
    /// Soft delete: flips the status to `inactive`.
    fn deactivate_salesperson(&self, salesperson_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over companies.
pub trait CompanyReader {
    fn get_company_by_id(&self, id: i32) -> RepositoryResult<Option<Company>>;
    fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
}

/// Write operations over companies.
pub trait CompanyWriter {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
    fn update_company(&self, company_id: i32, updates: &UpdateCompany)
        -> RepositoryResult<Company>;
    fn delete_company(&self, company_id: i32) -> RepositoryResult<()>;
}

/// Read-only sales rollups, recomputed in full on every call.
pub trait SalesReader {
    fn sales_summary(&self) -> RepositoryResult<SalesSummary>;
    fn sales_by_salesperson(&self) -> RepositoryResult<Vec<SalespersonSales>>;
}
