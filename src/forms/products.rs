use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, ProductListQuery, UpdateProduct};

/// Body of `POST /products`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub company_id: Option<i32>,
    #[validate(range(min = 0.0))]
    pub base_price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub min_retail_price: f64,
    pub hsn: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub cgst: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub sgst: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub cess: f64,
}

impl From<AddProductForm> for NewProduct {
    fn from(form: AddProductForm) -> Self {
        let mut new_product = NewProduct::new(form.name, form.base_price)
            .with_min_retail_price(form.min_retail_price)
            .with_tax_rates(form.cgst, form.sgst, form.cess);
        if let Some(company_id) = form.company_id {
            new_product = new_product.with_company_id(company_id);
        }
        if let Some(hsn) = form.hsn {
            new_product = new_product.with_hsn(hsn);
        }
        new_product
    }
}

/// Body of `PATCH /products/{id}`. Absent fields stay untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub company_id: Option<Option<i32>>,
    #[validate(range(min = 0.0))]
    pub base_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub min_retail_price: Option<f64>,
    pub hsn: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub cgst: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub sgst: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub cess: Option<f64>,
    pub is_active: Option<bool>,
}

impl From<UpdateProductForm> for UpdateProduct {
    fn from(form: UpdateProductForm) -> Self {
        Self {
            name: form.name,
            company_id: form.company_id,
            base_price: form.base_price,
            min_retail_price: form.min_retail_price,
            hsn: form.hsn,
            cgst: form.cgst,
            sgst: form.sgst,
            cess: form.cess,
            is_active: form.is_active,
        }
    }
}

/// Query string of `GET /products`.
#[derive(Debug, Deserialize, Default)]
pub struct ListProductsQuery {
    pub company_id: Option<i32>,
    pub search: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl From<ListProductsQuery> for ProductListQuery {
    fn from(query: ListProductsQuery) -> Self {
        let mut list_query = ProductListQuery::new();
        if let Some(company_id) = query.company_id {
            list_query = list_query.company_id(company_id);
        }
        if let Some(search) = query.search.filter(|s| !s.trim().is_empty()) {
            list_query = list_query.search(search);
        }
        if query.include_inactive {
            list_query = list_query.include_inactive();
        }
        list_query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_form_converts_with_defaults() {
        let form = AddProductForm {
            name: "Parle-G".to_string(),
            company_id: Some(2),
            base_price: 80.0,
            min_retail_price: 0.0,
            hsn: Some("1905".to_string()),
            cgst: 9.0,
            sgst: 9.0,
            cess: 0.0,
        };
        form.validate().unwrap();

        let new_product = NewProduct::from(form);
        assert_eq!(new_product.company_id, Some(2));
        assert_eq!(new_product.hsn, "1905");
        assert_eq!(new_product.cgst, 9.0);
    }

    #[test]
    fn add_product_form_rejects_negative_price() {
        let form = AddProductForm {
            name: "Parle-G".to_string(),
            company_id: None,
            base_price: -1.0,
            min_retail_price: 0.0,
            hsn: None,
            cgst: 0.0,
            sgst: 0.0,
            cess: 0.0,
        };
        assert!(form.validate().is_err());
    }
}
