use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub company_id: Option<i32>,
    pub name: String,
    pub base_price: f64,
    pub min_retail_price: f64,
    pub hsn: String,
    pub cgst: f64,
    pub sgst: f64,
    pub cess: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub company_id: Option<i32>,
    pub name: &'a str,
    pub base_price: f64,
    pub min_retail_price: f64,
    pub hsn: &'a str,
    pub cgst: f64,
    pub sgst: f64,
    pub cess: f64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub company_id: Option<Option<i32>>,
    pub base_price: Option<f64>,
    pub min_retail_price: Option<f64>,
    pub hsn: Option<&'a str>,
    pub cgst: Option<f64>,
    pub sgst: Option<f64>,
    pub cess: Option<f64>,
    pub is_active: Option<bool>,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            name: value.name,
            base_price: value.base_price,
            min_retail_price: value.min_retail_price,
            hsn: value.hsn,
            cgst: value.cgst,
            sgst: value.sgst,
            cess: value.cess,
            is_active: value.is_active,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            company_id: value.company_id,
            name: value.name.as_str(),
            base_price: value.base_price,
            min_retail_price: value.min_retail_price,
            hsn: value.hsn.as_str(),
            cgst: value.cgst,
            sgst: value.sgst,
            cess: value.cess,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_deref(),
            company_id: value.company_id,
            base_price: value.base_price,
            min_retail_price: value.min_retail_price,
            hsn: value.hsn.as_deref(),
            cgst: value.cgst,
            sgst: value.sgst,
            cess: value.cess,
            is_active: value.is_active,
        }
    }
}
