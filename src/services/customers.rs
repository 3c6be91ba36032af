use validator::Validate;

use crate::domain::customer::Customer;
use crate::forms::customers::{AddCustomerForm, ReassignCustomersForm, UpdateCustomerForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn create_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_customer(&form.into())
        .map_err(ServiceError::from)
}

pub fn modify_customer<R>(
    repo: &R,
    customer_id: i32,
    form: UpdateCustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_customer(customer_id, &form.into())
        .map_err(ServiceError::from)
}

pub fn remove_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(customer_id).map_err(ServiceError::from)
}

/// Moves every customer of one salesperson to another. Returns how many
/// customers moved.
pub fn reassign_customers<R>(repo: &R, form: ReassignCustomersForm) -> ServiceResult<usize>
where
    R: CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if form.from_salesperson_id == form.to_salesperson_id {
        return Err(ServiceError::Form(
            "source and target salesperson must differ".to_string(),
        ));
    }

    repo.reassign_customers(form.from_salesperson_id, form.to_salesperson_id)
        .map_err(ServiceError::from)
}

pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_customers<R>(repo: &R, salesperson_id: Option<i32>) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_customers(salesperson_id)
        .map_err(ServiceError::from)
}
