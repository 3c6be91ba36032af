pub mod auth;
pub mod companies;
pub mod customers;
pub mod orders;
pub mod products;
pub mod salespersons;
