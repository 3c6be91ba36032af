use diesel::prelude::*;

use crate::domain::salesperson::{
    NewSalesperson as DomainNewSalesperson, Salesperson as DomainSalesperson, SalespersonStatus,
    UpdateSalesperson as DomainUpdateSalesperson,
};
use crate::models::salesperson::{
    NewSalesperson as DbNewSalesperson, Salesperson as DbSalesperson,
    UpdateSalesperson as DbUpdateSalesperson,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SalespersonReader, SalespersonWriter};

impl SalespersonReader for DieselRepository {
    fn get_salesperson_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSalesperson>> {
        use crate::schema::salespersons;

        let mut conn = self.conn()?;
        let salesperson = salespersons::table
            .filter(salespersons::id.eq(id))
            .first::<DbSalesperson>(&mut conn)
            .optional()?;

        Ok(salesperson.map(DomainSalesperson::from))
    }

    fn get_salesperson_by_identifier(
        &self,
        identifier: &str,
    ) -> RepositoryResult<Option<DomainSalesperson>> {
        use crate::schema::salespersons;

        let mut conn = self.conn()?;

        let email = identifier.to_lowercase();
        let salesperson = salespersons::table
            .filter(
                salespersons::email
                    .eq(&email)
                    .or(salespersons::phone.eq(Some(identifier))),
            )
            .first::<DbSalesperson>(&mut conn)
            .optional()?;

        Ok(salesperson.map(DomainSalesperson::from))
    }

    fn list_salespersons(&self) -> RepositoryResult<Vec<DomainSalesperson>> {
        use crate::schema::salespersons;

        let mut conn = self.conn()?;

        let rows = salespersons::table
            .filter(salespersons::status.eq(SalespersonStatus::Active.as_str()))
            .order(salespersons::id.desc())
            .load::<DbSalesperson>(&mut conn)?;

        Ok(rows.into_iter().map(DomainSalesperson::from).collect())
    }
}

impl SalespersonWriter for DieselRepository {
    fn create_salesperson(
        &self,
        new_salesperson: &DomainNewSalesperson,
    ) -> RepositoryResult<DomainSalesperson> {
        use crate::schema::salespersons;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(salespersons::table)
            .values(DbNewSalesperson::from(new_salesperson))
            .get_result::<DbSalesperson>(&mut conn)?;

        Ok(created.into())
    }

    fn update_salesperson(
        &self,
        salesperson_id: i32,
        updates: &DomainUpdateSalesperson,
    ) -> RepositoryResult<DomainSalesperson> {
        use crate::schema::salespersons;

        let mut conn = self.conn()?;

        let updated =
            diesel::update(salespersons::table.filter(salespersons::id.eq(salesperson_id)))
                .set(DbUpdateSalesperson::from(updates))
                .get_result::<DbSalesperson>(&mut conn)?;

        Ok(updated.into())
    }

    fn deactivate_salesperson(&self, salesperson_id: i32) -> RepositoryResult<()> {
        use crate::schema::salespersons;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(salespersons::table.filter(salespersons::id.eq(salesperson_id)))
                .set(salespersons::status.eq(SalespersonStatus::Inactive.as_str()))
                .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
