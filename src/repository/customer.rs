use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::id.eq(id))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(DomainCustomer::from))
    }

    fn list_customers(&self, salesperson_id: Option<i32>) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let mut items = customers::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(salesperson) = salesperson_id {
            items = items.filter(customers::salesperson_id.eq(Some(salesperson)));
        }

        let rows = items
            .order(customers::name.asc())
            .load::<DbCustomer>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCustomer::from).collect())
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &DomainNewCustomer) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(customers::table)
            .values(DbNewCustomer::from(new_customer))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let updated = diesel::update(customers::table.filter(customers::id.eq(customer_id)))
            .set(DbUpdateCustomer::from(updates))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(customers::table.filter(customers::id.eq(customer_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn reassign_customers(&self, from: i32, to: i32) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let moved =
            diesel::update(customers::table.filter(customers::salesperson_id.eq(Some(from))))
                .set(customers::salesperson_id.eq(Some(to)))
                .execute(&mut conn)?;

        Ok(moved)
    }
}
