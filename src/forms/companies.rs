use serde::Deserialize;
use validator::Validate;

use crate::domain::company::{NewCompany, UpdateCompany};

/// Body of `POST /companies`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCompanyForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(url)]
    pub logo_url: Option<String>,
}

impl From<AddCompanyForm> for NewCompany {
    fn from(form: AddCompanyForm) -> Self {
        let mut new_company = NewCompany::new(form.name);
        if let Some(logo_url) = form.logo_url {
            new_company = new_company.with_logo_url(logo_url);
        }
        new_company
    }
}

/// Body of `PATCH /companies/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub logo_url: Option<Option<String>>,
}

impl From<UpdateCompanyForm> for UpdateCompany {
    fn from(form: UpdateCompanyForm) -> Self {
        Self {
            name: form.name,
            logo_url: form.logo_url,
        }
    }
}
