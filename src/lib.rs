pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pdf;
pub mod pricing;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
