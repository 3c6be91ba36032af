use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::salesperson::{
    NewSalesperson as DomainNewSalesperson, Salesperson as DomainSalesperson,
    UpdateSalesperson as DomainUpdateSalesperson,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::salespersons)]
pub struct Salesperson {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::salespersons)]
pub struct NewSalesperson<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub password_hash: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::salespersons)]
pub struct UpdateSalesperson<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<Option<&'a str>>,
    pub status: Option<&'a str>,
}

impl From<Salesperson> for DomainSalesperson {
    fn from(value: Salesperson) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            password_hash: value.password_hash,
            status: value.status.as_str().into(),
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewSalesperson> for NewSalesperson<'a> {
    fn from(value: &'a DomainNewSalesperson) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            phone: value.phone.as_deref(),
            password_hash: value.password_hash.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateSalesperson> for UpdateSalesperson<'a> {
    fn from(value: &'a DomainUpdateSalesperson) -> Self {
        Self {
            name: value.name.as_deref(),
            email: value.email.as_deref(),
            phone: value
                .phone
                .as_ref()
                .map(|phone| phone.as_ref().map(String::as_str)),
            status: value.status.map(|status| status.as_str()),
        }
    }
}
