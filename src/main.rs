use std::env;

use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;

use merchant_orders::auth::ServerConfig;
use merchant_orders::db::establish_connection_pool;
use merchant_orders::repository::DieselRepository;
use merchant_orders::routes::auth::{login, logout, me};
use merchant_orders::routes::companies::{
    create_company, delete_company, get_company, list_companies, update_company,
};
use merchant_orders::routes::customers::{
    create_customer, delete_customer, get_customer, list_customers, list_my_customers,
    reassign_customers, update_customer,
};
use merchant_orders::routes::invoices::download_invoice;
use merchant_orders::routes::orders::{
    create_my_order, create_order, get_order, list_my_orders, list_orders, replace_order_items,
    update_item_price, update_order_notes, update_order_status,
};
use merchant_orders::routes::products::{
    create_product, get_product, list_products, update_product,
};
use merchant_orders::routes::sales::{sales_by_salesperson, sales_summary};
use merchant_orders::routes::salespersons::{
    create_salesperson, deactivate_salesperson, get_salesperson, list_salespersons,
    update_salesperson,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let jwt_secret = match env::var("JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            log::error!("JWT_SECRET environment variable not set");
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig { jwt_secret };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(login)
                    .service(logout)
                    .service(me)
                    .service(list_my_orders)
                    .service(create_my_order)
                    .service(list_my_customers)
                    .service(create_order)
                    .service(list_orders)
                    .service(get_order)
                    .service(update_order_status)
                    .service(replace_order_items)
                    .service(update_order_notes)
                    .service(update_item_price)
                    .service(download_invoice)
                    .service(create_product)
                    .service(list_products)
                    .service(get_product)
                    .service(update_product)
                    .service(create_customer)
                    .service(list_customers)
                    .service(reassign_customers)
                    .service(get_customer)
                    .service(update_customer)
                    .service(delete_customer)
                    .service(create_salesperson)
                    .service(list_salespersons)
                    .service(get_salesperson)
                    .service(update_salesperson)
                    .service(deactivate_salesperson)
                    .service(create_company)
                    .service(list_companies)
                    .service(get_company)
                    .service(update_company)
                    .service(delete_company)
                    .service(sales_summary)
                    .service(sales_by_salesperson),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
