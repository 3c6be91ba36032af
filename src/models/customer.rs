use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub salesperson_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub region: Option<&'a str>,
    pub salesperson_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
pub struct UpdateCustomer<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<Option<&'a str>>,
    pub email: Option<Option<&'a str>>,
    pub region: Option<Option<&'a str>>,
    pub salesperson_id: Option<Option<i32>>,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            phone: value.phone,
            email: value.email,
            region: value.region,
            salesperson_id: value.salesperson_id,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            name: value.name.as_str(),
            phone: value.phone.as_deref(),
            email: value.email.as_deref(),
            region: value.region.as_deref(),
            salesperson_id: value.salesperson_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(value: &'a DomainUpdateCustomer) -> Self {
        Self {
            name: value.name.as_deref(),
            phone: value
                .phone
                .as_ref()
                .map(|phone| phone.as_ref().map(String::as_str)),
            email: value
                .email
                .as_ref()
                .map(|email| email.as_ref().map(String::as_str)),
            region: value
                .region
                .as_ref()
                .map(|region| region.as_ref().map(String::as_str)),
            salesperson_id: value.salesperson_id,
        }
    }
}
