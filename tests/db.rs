use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{Integer, Text};

use merchant_orders::domain::order::NewOrder;
use merchant_orders::repository::{DieselRepository, OrderWriter};

mod common;

#[derive(QueryableByName)]
struct ForeignKeysRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalModeRow {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_pool_applies_sqlite_pragmas_per_connection() {
    let test_db = common::TestDb::new("test_pool_pragmas.db");
    let mut conn = test_db.pool().get().unwrap();

    let fk = sql_query("PRAGMA foreign_keys")
        .get_result::<ForeignKeysRow>(&mut conn)
        .unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let mode = sql_query("PRAGMA journal_mode")
        .get_result::<JournalModeRow>(&mut conn)
        .unwrap();
    assert_eq!(mode.journal_mode.to_lowercase(), "wal");
}

#[test]
fn test_foreign_keys_are_enforced() {
    let test_db = common::TestDb::new("test_foreign_keys_enforced.db");
    let repo = DieselRepository::new(test_db.pool());

    // No customer with this id exists, so the insert must be rejected.
    let result = repo.create_order(&NewOrder::new(9999, Vec::new()));
    assert!(result.is_err());
}

#[test]
fn test_dropping_test_db_removes_wal_files() {
    let base = "test_db_wal_cleanup.db";

    {
        let test_db = common::TestDb::new(base);
        assert!(test_db.pool().get().is_ok());
    }

    assert!(!std::path::Path::new(base).exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}
