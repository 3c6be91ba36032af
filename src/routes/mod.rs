use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod companies;
pub mod customers;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod sales;
pub mod salespersons;

/// Map a service error onto an HTTP response. `context` names the failed
/// operation in the server log for the 500 case.
pub fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest().json(json!({ "error": message })),
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "not found" })),
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }))
        }
        ServiceError::Conflict => HttpResponse::Conflict().json(json!({ "error": "conflict" })),
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
