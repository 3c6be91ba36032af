use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;

use crate::auth::AuthenticatedSalesperson;
use crate::forms::customers::{
    AddCustomerForm, ListCustomersQuery, ReassignCustomersForm, UpdateCustomerForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::customers;

#[post("/customers")]
pub async fn create_customer(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCustomerForm>,
) -> impl Responder {
    match customers::create_customer(repo.get_ref(), form.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response("Failed to create customer", err),
    }
}

#[get("/customers")]
pub async fn list_customers(
    repo: web::Data<DieselRepository>,
    params: web::Query<ListCustomersQuery>,
) -> impl Responder {
    match customers::list_customers(repo.get_ref(), params.salesperson_id) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => error_response("Failed to list customers", err),
    }
}

/// Customers assigned to the logged-in salesperson.
#[get("/salesperson/customers")]
pub async fn list_my_customers(
    salesperson: AuthenticatedSalesperson,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers::list_customers(repo.get_ref(), Some(salesperson.sid)) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => error_response("Failed to list salesperson customers", err),
    }
}

#[get("/customers/{customer_id}")]
pub async fn get_customer(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match customers::get_customer(repo.get_ref(), path.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response("Failed to load customer", err),
    }
}

#[patch("/customers/{customer_id}")]
pub async fn update_customer(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateCustomerForm>,
) -> impl Responder {
    match customers::modify_customer(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response("Failed to update customer", err),
    }
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match customers::remove_customer(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "deleted": true })),
        Err(err) => error_response("Failed to delete customer", err),
    }
}

#[post("/customers/reassign")]
pub async fn reassign_customers(
    repo: web::Data<DieselRepository>,
    form: web::Json<ReassignCustomersForm>,
) -> impl Responder {
    match customers::reassign_customers(repo.get_ref(), form.into_inner()) {
        Ok(moved) => HttpResponse::Ok().json(json!({ "reassigned": moved })),
        Err(err) => error_response("Failed to reassign customers", err),
    }
}
