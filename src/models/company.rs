use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::company::{
    Company as DomainCompany, NewCompany as DomainNewCompany, UpdateCompany as DomainUpdateCompany,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
pub struct NewCompany<'a> {
    pub name: &'a str,
    pub logo_url: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::companies)]
pub struct UpdateCompany<'a> {
    pub name: Option<&'a str>,
    pub logo_url: Option<Option<&'a str>>,
}

impl From<Company> for DomainCompany {
    fn from(value: Company) -> Self {
        Self {
            id: value.id,
            name: value.name,
            logo_url: value.logo_url,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCompany> for NewCompany<'a> {
    fn from(value: &'a DomainNewCompany) -> Self {
        Self {
            name: value.name.as_str(),
            logo_url: value.logo_url.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCompany> for UpdateCompany<'a> {
    fn from(value: &'a DomainUpdateCompany) -> Self {
        Self {
            name: value.name.as_deref(),
            logo_url: value
                .logo_url
                .as_ref()
                .map(|logo| logo.as_ref().map(String::as_str)),
        }
    }
}
