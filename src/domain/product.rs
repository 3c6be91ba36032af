use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Catalog product with the tax fields printed on invoices.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    pub id: i32,
    /// Company the product belongs to, if any.
    pub company_id: Option<i32>,
    pub name: String,
    /// Catalog price captured into order lines as `unit_price`.
    pub base_price: f64,
    /// Minimum price the retailer is allowed to resell at.
    pub min_retail_price: f64,
    /// HSN tax-classification code, required on invoices.
    pub hsn: String,
    pub cgst: f64,
    pub sgst: f64,
    pub cess: f64,
    /// Soft-delete flag; inactive products are excluded from active catalogs
    /// but stay referenceable from historical order lines.
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub company_id: Option<i32>,
    pub name: String,
    pub base_price: f64,
    pub min_retail_price: f64,
    pub hsn: String,
    pub cgst: f64,
    pub sgst: f64,
    pub cess: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, base_price: f64) -> Self {
        Self {
            company_id: None,
            name: name.into(),
            base_price,
            min_retail_price: 0.0,
            hsn: String::new(),
            cgst: 0.0,
            sgst: 0.0,
            cess: 0.0,
        }
    }

    pub fn with_company_id(mut self, company_id: i32) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn with_min_retail_price(mut self, min_retail_price: f64) -> Self {
        self.min_retail_price = min_retail_price;
        self
    }

    pub fn with_hsn(mut self, hsn: impl Into<String>) -> Self {
        self.hsn = hsn.into();
        self
    }

    /// Set all three tax rate percentages at once.
    pub fn with_tax_rates(mut self, cgst: f64, sgst: f64, cess: f64) -> Self {
        self.cgst = cgst;
        self.sgst = sgst;
        self.cess = cess;
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub company_id: Option<Option<i32>>,
    pub base_price: Option<f64>,
    pub min_retail_price: Option<f64>,
    pub hsn: Option<String>,
    pub cgst: Option<f64>,
    pub sgst: Option<f64>,
    pub cess: Option<f64>,
    pub is_active: Option<bool>,
}

impl UpdateProduct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn base_price(mut self, base_price: f64) -> Self {
        self.base_price = Some(base_price);
        self
    }

    /// Toggle the soft-delete flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional company filter.
    pub company_id: Option<i32>,
    /// Optional case-insensitive name search.
    pub search: Option<String>,
    /// Whether soft-deleted products should be included.
    pub include_inactive: bool,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_id(mut self, company_id: i32) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }
}
