use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;

use crate::forms::companies::{AddCompanyForm, UpdateCompanyForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::companies;

#[post("/companies")]
pub async fn create_company(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCompanyForm>,
) -> impl Responder {
    match companies::create_company(repo.get_ref(), form.into_inner()) {
        Ok(company) => HttpResponse::Ok().json(company),
        Err(err) => error_response("Failed to create company", err),
    }
}

#[get("/companies")]
pub async fn list_companies(repo: web::Data<DieselRepository>) -> impl Responder {
    match companies::list_companies(repo.get_ref()) {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(err) => error_response("Failed to list companies", err),
    }
}

#[get("/companies/{company_id}")]
pub async fn get_company(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match companies::get_company(repo.get_ref(), path.into_inner()) {
        Ok(company) => HttpResponse::Ok().json(company),
        Err(err) => error_response("Failed to load company", err),
    }
}

#[patch("/companies/{company_id}")]
pub async fn update_company(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateCompanyForm>,
) -> impl Responder {
    match companies::modify_company(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(company) => HttpResponse::Ok().json(company),
        Err(err) => error_response("Failed to update company", err),
    }
}

#[delete("/companies/{company_id}")]
pub async fn delete_company(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match companies::remove_company(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "deleted": true })),
        Err(err) => error_response("Failed to delete company", err),
    }
}
