use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;

use crate::domain::salesperson::{Salesperson, SalespersonStatus};
use crate::forms::salespersons::{AddSalespersonForm, UpdateSalespersonForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::salespersons;

/// What a salesperson looks like on the wire. The password hash never
/// leaves the server.
#[derive(Debug, Serialize)]
pub struct SalespersonResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: SalespersonStatus,
    pub created_at: NaiveDateTime,
}

impl From<Salesperson> for SalespersonResponse {
    fn from(salesperson: Salesperson) -> Self {
        Self {
            id: salesperson.id,
            name: salesperson.name,
            email: salesperson.email,
            phone: salesperson.phone,
            status: salesperson.status,
            created_at: salesperson.created_at,
        }
    }
}

#[post("/salespersons")]
pub async fn create_salesperson(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddSalespersonForm>,
) -> impl Responder {
    match salespersons::create_salesperson(repo.get_ref(), form.into_inner()) {
        Ok(salesperson) => HttpResponse::Ok().json(SalespersonResponse::from(salesperson)),
        Err(err) => error_response("Failed to create salesperson", err),
    }
}

#[get("/salespersons")]
pub async fn list_salespersons(repo: web::Data<DieselRepository>) -> impl Responder {
    match salespersons::list_salespersons(repo.get_ref()) {
        Ok(salespersons) => HttpResponse::Ok().json(
            salespersons
                .into_iter()
                .map(SalespersonResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response("Failed to list salespersons", err),
    }
}

#[get("/salespersons/{salesperson_id}")]
pub async fn get_salesperson(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match salespersons::get_salesperson(repo.get_ref(), path.into_inner()) {
        Ok(salesperson) => HttpResponse::Ok().json(SalespersonResponse::from(salesperson)),
        Err(err) => error_response("Failed to load salesperson", err),
    }
}

#[patch("/salespersons/{salesperson_id}")]
pub async fn update_salesperson(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateSalespersonForm>,
) -> impl Responder {
    match salespersons::modify_salesperson(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(salesperson) => HttpResponse::Ok().json(SalespersonResponse::from(salesperson)),
        Err(err) => error_response("Failed to update salesperson", err),
    }
}

#[delete("/salespersons/{salesperson_id}")]
pub async fn deactivate_salesperson(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match salespersons::deactivate_salesperson(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "deactivated": true })),
        Err(err) => error_response("Failed to deactivate salesperson", err),
    }
}
