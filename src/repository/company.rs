use diesel::prelude::*;

use crate::domain::company::{
    Company as DomainCompany, NewCompany as DomainNewCompany,
    UpdateCompany as DomainUpdateCompany,
};
use crate::models::company::{
    Company as DbCompany, NewCompany as DbNewCompany, UpdateCompany as DbUpdateCompany,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CompanyReader, CompanyWriter, DieselRepository};

impl CompanyReader for DieselRepository {
    fn get_company_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCompany>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let company = companies::table
            .filter(companies::id.eq(id))
            .first::<DbCompany>(&mut conn)
            .optional()?;

        Ok(company.map(DomainCompany::from))
    }

    fn list_companies(&self) -> RepositoryResult<Vec<DomainCompany>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        let rows = companies::table
            .order(companies::name.asc())
            .load::<DbCompany>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCompany::from).collect())
    }
}

impl CompanyWriter for DieselRepository {
    fn create_company(&self, new_company: &DomainNewCompany) -> RepositoryResult<DomainCompany> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(companies::table)
            .values(DbNewCompany::from(new_company))
            .get_result::<DbCompany>(&mut conn)?;

        Ok(created.into())
    }

    fn update_company(
        &self,
        company_id: i32,
        updates: &DomainUpdateCompany,
    ) -> RepositoryResult<DomainCompany> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        let updated = diesel::update(companies::table.filter(companies::id.eq(company_id)))
            .set(DbUpdateCompany::from(updates))
            .get_result::<DbCompany>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_company(&self, company_id: i32) -> RepositoryResult<()> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(companies::table.filter(companies::id.eq(company_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
