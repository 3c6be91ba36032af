use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A supplier company whose products appear in the catalog.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub logo_url: Option<String>,
}

impl NewCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_url: None,
        }
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }
}

/// Patch data applied when updating an existing company.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub logo_url: Option<Option<String>>,
}
