use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account status for a salesperson. Removal is a soft delete to keep
/// historical orders attributable.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SalespersonStatus {
    Active,
    Inactive,
}

impl SalespersonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl From<&str> for SalespersonStatus {
    fn from(value: &str) -> Self {
        match value {
            "inactive" => Self::Inactive,
            _ => Self::Active,
        }
    }
}

/// A field salesperson who takes orders from assigned customers.
#[derive(Debug, Clone)]
pub struct Salesperson {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Argon2 hash of the login password. Never serialized.
    pub password_hash: String,
    pub status: SalespersonStatus,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new salesperson. The password is expected to
/// be hashed before it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewSalesperson {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
}

/// Patch data applied when updating an existing salesperson.
#[derive(Debug, Clone, Default)]
pub struct UpdateSalesperson {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub status: Option<SalespersonStatus>,
}
