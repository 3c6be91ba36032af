use actix_web::{get, patch, post, web, HttpResponse, Responder};

use crate::forms::products::{AddProductForm, ListProductsQuery, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products;

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to create product", err),
    }
}

#[get("/products")]
pub async fn list_products(
    repo: web::Data<DieselRepository>,
    params: web::Query<ListProductsQuery>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner().into()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response("Failed to list products", err),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match products::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to load product", err),
    }
}

#[patch("/products/{product_id}")]
pub async fn update_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateProductForm>,
) -> impl Responder {
    match products::modify_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("Failed to update product", err),
    }
}
