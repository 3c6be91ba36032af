use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use crate::auth::{AuthenticatedSalesperson, ServerConfig, AUTH_COOKIE};
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth;

#[post("/salesperson/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    match auth::login(repo.get_ref(), form.into_inner(), &server_config.jwt_secret) {
        Ok(outcome) => {
            let cookie = Cookie::build(AUTH_COOKIE, outcome.token)
                .path("/")
                .http_only(true)
                .finish();
            HttpResponse::Ok().cookie(cookie).json(json!({
                "salesperson_id": outcome.salesperson_id,
                "name": outcome.name,
            }))
        }
        Err(err) => error_response("Failed to log in", err),
    }
}

#[post("/salesperson/logout")]
pub async fn logout() -> impl Responder {
    let mut cookie = Cookie::build(AUTH_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.set_max_age(Duration::ZERO);
    HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "logged_out": true }))
}

#[get("/salesperson/me")]
pub async fn me(salesperson: AuthenticatedSalesperson) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "salesperson_id": salesperson.sid,
        "name": salesperson.name,
    }))
}
