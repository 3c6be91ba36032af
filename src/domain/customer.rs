use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A retail customer served by a salesperson.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    /// Salesperson this customer is assigned to, if any.
    pub salesperson_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub salesperson_id: Option<i32>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            email: None,
            region: None,
            salesperson_id: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_salesperson_id(mut self, salesperson_id: i32) -> Self {
        self.salesperson_id = Some(salesperson_id);
        self
    }
}

/// Patch data applied when updating an existing customer.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub region: Option<Option<String>>,
    pub salesperson_id: Option<Option<i32>>,
}
