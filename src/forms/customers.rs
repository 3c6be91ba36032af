use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};

/// Body of `POST /customers`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomerForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub region: Option<String>,
    pub salesperson_id: Option<i32>,
}

impl From<AddCustomerForm> for NewCustomer {
    fn from(form: AddCustomerForm) -> Self {
        let mut new_customer = NewCustomer::new(form.name);
        if let Some(phone) = form.phone {
            new_customer = new_customer.with_phone(phone);
        }
        if let Some(email) = form.email {
            new_customer = new_customer.with_email(email);
        }
        if let Some(region) = form.region {
            new_customer = new_customer.with_region(region);
        }
        if let Some(salesperson_id) = form.salesperson_id {
            new_customer = new_customer.with_salesperson_id(salesperson_id);
        }
        new_customer
    }
}

/// Body of `PATCH /customers/{id}`. A present-but-null field clears the
/// stored value; an absent field stays untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub salesperson_id: Option<Option<i32>>,
}

impl From<UpdateCustomerForm> for UpdateCustomer {
    fn from(form: UpdateCustomerForm) -> Self {
        Self {
            name: form.name,
            phone: form.phone,
            email: form.email,
            region: form.region,
            salesperson_id: form.salesperson_id,
        }
    }
}

/// Body of `POST /customers/reassign`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReassignCustomersForm {
    #[validate(range(min = 1))]
    pub from_salesperson_id: i32,
    #[validate(range(min = 1))]
    pub to_salesperson_id: i32,
}

/// Query string of `GET /customers`.
#[derive(Debug, Deserialize, Default)]
pub struct ListCustomersQuery {
    pub salesperson_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_customer_form_rejects_bad_email() {
        let form = AddCustomerForm {
            name: "Sharma Kirana".to_string(),
            phone: None,
            email: Some("not-an-email".to_string()),
            region: None,
            salesperson_id: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn reassign_form_requires_positive_ids() {
        let form = ReassignCustomersForm {
            from_salesperson_id: 0,
            to_salesperson_id: 3,
        };
        assert!(form.validate().is_err());
    }
}
