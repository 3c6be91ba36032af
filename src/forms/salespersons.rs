use serde::Deserialize;
use validator::Validate;

use crate::domain::salesperson::{SalespersonStatus, UpdateSalesperson};

/// Body of `POST /salespersons`. The password arrives in the clear and is
/// hashed by the service before anything is stored.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSalespersonForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Body of `PATCH /salespersons/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSalespersonForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub status: Option<SalespersonStatus>,
}

impl From<UpdateSalespersonForm> for UpdateSalesperson {
    fn from(form: UpdateSalespersonForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            status: form.status,
        }
    }
}
