//! Helpers for integration tests.

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use merchant_orders::db::{establish_connection_pool, DbPool};
use merchant_orders::domain::customer::NewCustomer;
use merchant_orders::domain::product::NewProduct;
use merchant_orders::repository::{CustomerWriter, DieselRepository, ProductWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Insert a customer and return its id.
#[allow(dead_code)]
pub fn seed_customer(repo: &DieselRepository, name: &str) -> i32 {
    repo.create_customer(&NewCustomer::new(name))
        .expect("failed to seed customer")
        .id
}

/// Insert a taxed product and return its id.
#[allow(dead_code)]
pub fn seed_product(repo: &DieselRepository, name: &str, base_price: f64) -> i32 {
    let new_product = NewProduct::new(name, base_price)
        .with_hsn("1905")
        .with_tax_rates(9.0, 9.0, 0.0);
    repo.create_product(&new_product)
        .expect("failed to seed product")
        .id
}
