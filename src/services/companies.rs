use validator::Validate;

use crate::domain::company::Company;
use crate::forms::companies::{AddCompanyForm, UpdateCompanyForm};
use crate::repository::{CompanyReader, CompanyWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_company<R>(repo: &R, form: AddCompanyForm) -> ServiceResult<Company>
where
    R: CompanyWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_company(&form.into()).map_err(ServiceError::from)
}

pub fn modify_company<R>(repo: &R, company_id: i32, form: UpdateCompanyForm) -> ServiceResult<Company>
where
    R: CompanyWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_company(company_id, &form.into())
        .map_err(ServiceError::from)
}

pub fn remove_company<R>(repo: &R, company_id: i32) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    repo.delete_company(company_id).map_err(ServiceError::from)
}

pub fn get_company<R>(repo: &R, company_id: i32) -> ServiceResult<Company>
where
    R: CompanyReader + ?Sized,
{
    repo.get_company_by_id(company_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_companies<R>(repo: &R) -> ServiceResult<Vec<Company>>
where
    R: CompanyReader + ?Sized,
{
    repo.list_companies().map_err(ServiceError::from)
}
