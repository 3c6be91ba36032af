use actix_web::{get, patch, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthenticatedSalesperson;
use crate::domain::order::{OrderListQuery, OrderStatus};
use crate::forms::orders::{
    CreateOrderForm, ReplaceItemsForm, UpdateItemPriceForm, UpdateNotesForm, UpdateStatusForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::orders;

/// Query string accepted by `GET /orders`.
#[derive(Debug, Deserialize, Default)]
pub struct ListOrdersQuery {
    pub status: Option<String>,
    pub customer_id: Option<i32>,
    pub salesperson_id: Option<i32>,
}

#[post("/orders")]
pub async fn create_order(
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    match orders::create_order(repo.get_ref(), form.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(json!({ "order_id": order.id })),
        Err(err) => error_response("Failed to create order", err),
    }
}

#[get("/orders")]
pub async fn list_orders(
    repo: web::Data<DieselRepository>,
    params: web::Query<ListOrdersQuery>,
) -> impl Responder {
    let params = params.into_inner();

    let mut query = OrderListQuery::new();
    if let Some(status) = params.status.as_deref() {
        match status.parse::<OrderStatus>() {
            Ok(status) => query = query.status(status),
            Err(err) => {
                return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
            }
        }
    }
    if let Some(customer_id) = params.customer_id {
        query = query.customer_id(customer_id);
    }
    if let Some(salesperson_id) = params.salesperson_id {
        query = query.salesperson_id(salesperson_id);
    }

    match orders::list_orders(repo.get_ref(), query) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => error_response("Failed to list orders", err),
    }
}

/// Orders belonging to the logged-in salesperson, newest first.
#[get("/salesperson/orders")]
pub async fn list_my_orders(
    salesperson: AuthenticatedSalesperson,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = OrderListQuery::new().salesperson_id(salesperson.sid);
    match orders::list_orders(repo.get_ref(), query) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => error_response("Failed to list salesperson orders", err),
    }
}

/// Creates an order attributed to the logged-in salesperson.
#[post("/salesperson/orders")]
pub async fn create_my_order(
    salesperson: AuthenticatedSalesperson,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    match orders::create_order_for_salesperson(repo.get_ref(), salesperson.sid, form.into_inner())
    {
        Ok(order) => HttpResponse::Ok().json(json!({ "order_id": order.id })),
        Err(err) => error_response("Failed to create salesperson order", err),
    }
}

#[get("/orders/{order_id}")]
pub async fn get_order(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match orders::get_order(repo.get_ref(), path.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response("Failed to load order", err),
    }
}

#[patch("/orders/{order_id}")]
pub async fn update_order_status(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateStatusForm>,
) -> impl Responder {
    match orders::change_status(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response("Failed to update order status", err),
    }
}

#[put("/orders/{order_id}/items")]
pub async fn replace_order_items(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<ReplaceItemsForm>,
) -> impl Responder {
    match orders::replace_items(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response("Failed to replace order items", err),
    }
}

#[patch("/orders/{order_id}/note")]
pub async fn update_order_notes(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateNotesForm>,
) -> impl Responder {
    match orders::update_notes(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response("Failed to update order notes", err),
    }
}

#[patch("/orders/{order_id}/items/{product_id}/price")]
pub async fn update_item_price(
    repo: web::Data<DieselRepository>,
    path: web::Path<(i32, i32)>,
    form: web::Json<UpdateItemPriceForm>,
) -> impl Responder {
    let (order_id, product_id) = path.into_inner();
    match orders::update_item_price(repo.get_ref(), order_id, product_id, form.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "updated": true })),
        Err(err) => error_response("Failed to update item price", err),
    }
}
