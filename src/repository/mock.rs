use mockall::mock;

use super::{
    CompanyReader, CompanyWriter, CustomerReader, CustomerWriter, InvoiceReader, InvoiceWriter,
    OrderReader, OrderWriter, ProductReader, ProductWriter, SalesReader, SalespersonReader,
    SalespersonWriter,
};
use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::invoice::{Invoice, InvoiceSource};
use crate::domain::order::{NewOrder, NewOrderItem, Order, OrderListQuery, OrderStatus};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::sales::{SalesSummary, SalespersonSales};
use crate::domain::salesperson::{NewSalesperson, Salesperson, UpdateSalesperson};
use crate::repository::errors::RepositoryResult;

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn replace_order_items(&self, order_id: i32, items: &[NewOrderItem]) -> RepositoryResult<Order>;
        fn update_order_status(&self, order_id: i32, status: OrderStatus) -> RepositoryResult<Order>;
        fn update_order_notes<'a>(&self, order_id: i32, notes: Option<&'a str>) -> RepositoryResult<Order>;
        fn update_item_price(&self, order_id: i32, product_id: i32, negotiated_price: f64) -> RepositoryResult<()>;
    }
}

mock! {
    pub InvoiceReader {}

    impl InvoiceReader for InvoiceReader {
        fn get_invoice_by_order(&self, order_id: i32) -> RepositoryResult<Option<Invoice>>;
        fn load_invoice_source(&self, order_id: i32) -> RepositoryResult<Option<InvoiceSource>>;
    }
}

mock! {
    pub InvoiceWriter {}

    impl InvoiceWriter for InvoiceWriter {
        fn get_or_allocate_invoice(&self, order_id: i32) -> RepositoryResult<Invoice>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self, salesperson_id: Option<i32>) -> RepositoryResult<Vec<Customer>>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
        fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
        fn reassign_customers(&self, from: i32, to: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub SalespersonReader {}

    impl SalespersonReader for SalespersonReader {
        fn get_salesperson_by_id(&self, id: i32) -> RepositoryResult<Option<Salesperson>>;
        fn get_salesperson_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Salesperson>>;
        fn list_salespersons(&self) -> RepositoryResult<Vec<Salesperson>>;
    }
}

mock! {
    pub SalespersonWriter {}

    impl SalespersonWriter for SalespersonWriter {
        fn create_salesperson(&self, new_salesperson: &NewSalesperson) -> RepositoryResult<Salesperson>;
        fn update_salesperson(&self, salesperson_id: i32, updates: &UpdateSalesperson) -> RepositoryResult<Salesperson>;
        fn deactivate_salesperson(&self, salesperson_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CompanyReader {}

    impl CompanyReader for CompanyReader {
        fn get_company_by_id(&self, id: i32) -> RepositoryResult<Option<Company>>;
        fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
    }
}

mock! {
    pub CompanyWriter {}

    impl CompanyWriter for CompanyWriter {
        fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
        fn update_company(&self, company_id: i32, updates: &UpdateCompany) -> RepositoryResult<Company>;
        fn delete_company(&self, company_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub SalesReader {}

    impl SalesReader for SalesReader {
        fn sales_summary(&self) -> RepositoryResult<SalesSummary>;
        fn sales_by_salesperson(&self) -> RepositoryResult<Vec<SalespersonSales>>;
    }
}
