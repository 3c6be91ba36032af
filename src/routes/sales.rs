use actix_web::{get, web, HttpResponse, Responder};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::sales;

#[get("/sales-summary")]
pub async fn sales_summary(repo: web::Data<DieselRepository>) -> impl Responder {
    match sales::sales_summary(repo.get_ref()) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => error_response("Failed to compute sales summary", err),
    }
}

#[get("/sales-summary/by-salesperson")]
pub async fn sales_by_salesperson(repo: web::Data<DieselRepository>) -> impl Responder {
    match sales::sales_by_salesperson(repo.get_ref()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => error_response("Failed to compute salesperson sales", err),
    }
}
