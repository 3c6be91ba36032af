use thiserror::Error;

use crate::pdf::PdfError;
use crate::repository::RepositoryError;

pub mod auth;
pub mod companies;
pub mod customers;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod sales;
pub mod salespersons;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer. Routes map these onto HTTP
/// status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed validation.
    #[error("{0}")]
    Form(String),
    /// The addressed entity does not exist.
    #[error("not found")]
    NotFound,
    /// Missing or failed authentication.
    #[error("unauthorized")]
    Unauthorized,
    /// The write collided with an existing row.
    #[error("conflict")]
    Conflict,
    /// Invoice rendering failed.
    #[error(transparent)]
    Pdf(#[from] PdfError),
    /// Anything the caller cannot fix.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict => Self::Conflict,
            other => Self::Internal(other.to_string()),
        }
    }
}
