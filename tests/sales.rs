use merchant_orders::domain::order::{NewOrder, NewOrderItem, OrderStatus};
use merchant_orders::domain::salesperson::NewSalesperson;
use merchant_orders::repository::{
    DieselRepository, OrderWriter, SalesReader, SalespersonWriter,
};

mod common;

fn item(product_id: i32, quantity: i32, negotiated_price: f64) -> NewOrderItem {
    NewOrderItem {
        product_id,
        quantity,
        negotiated_price,
    }
}

fn seed_salesperson(repo: &DieselRepository, name: &str, email: &str) -> i32 {
    repo.create_salesperson(&NewSalesperson {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: "$argon2id$fake".to_string(),
    })
    .expect("failed to seed salesperson")
    .id
}

#[test]
fn test_sales_summary_tracks_fulfilled_orders_only() {
    let test_db = common::TestDb::new("test_sales_summary_fulfilled_only.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = common::seed_customer(&repo, "Sharma Kirana");
    let biscuits = common::seed_product(&repo, "Parle-G", 80.0);

    let fulfilled = repo
        .create_order(&NewOrder::new(customer_id, vec![item(biscuits, 2, 100.0)]))
        .unwrap();
    repo.create_order(&NewOrder::new(customer_id, vec![item(biscuits, 5, 100.0)]))
        .unwrap();
    repo.update_order_status(fulfilled.id, OrderStatus::Fulfilled)
        .unwrap();

    let summary = repo.sales_summary().unwrap();

    assert_eq!(summary.total_orders, 2);
    // Revenue counts unit_price * quantity of fulfilled orders only.
    assert_eq!(summary.total_revenue, 160.0);
    assert_eq!(summary.total_items_sold, 2);
    assert_eq!(summary.unique_customers, 1);
    assert_eq!(summary.top_products.len(), 1);
    assert_eq!(summary.top_products[0].name, "Parle-G");
    assert_eq!(summary.top_products[0].quantity_sold, 2);
}

#[test]
fn test_status_flip_moves_revenue() {
    let test_db = common::TestDb::new("test_sales_status_flip.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = common::seed_customer(&repo, "Sharma Kirana");
    let biscuits = common::seed_product(&repo, "Parle-G", 80.0);

    let order = repo
        .create_order(&NewOrder::new(customer_id, vec![item(biscuits, 3, 100.0)]))
        .unwrap();

    let before = repo.sales_summary().unwrap();
    assert_eq!(before.total_revenue, 0.0);

    repo.update_order_status(order.id, OrderStatus::Fulfilled)
        .unwrap();
    let after = repo.sales_summary().unwrap();
    assert_eq!(after.total_revenue, 240.0);

    repo.update_order_status(order.id, OrderStatus::Cancelled)
        .unwrap();
    let cancelled = repo.sales_summary().unwrap();
    assert_eq!(cancelled.total_revenue, 0.0);
}

#[test]
fn test_sales_by_salesperson_includes_idle_accounts() {
    let test_db = common::TestDb::new("test_sales_by_salesperson_idle.db");
    let repo = DieselRepository::new(test_db.pool());

    let asha = seed_salesperson(&repo, "Asha", "asha@example.com");
    seed_salesperson(&repo, "Ravi", "ravi@example.com");

    let customer_id = common::seed_customer(&repo, "Sharma Kirana");
    let biscuits = common::seed_product(&repo, "Parle-G", 80.0);

    let order = repo
        .create_order(
            &NewOrder::new(customer_id, vec![item(biscuits, 2, 100.0)]).with_salesperson_id(asha),
        )
        .unwrap();
    repo.update_order_status(order.id, OrderStatus::Fulfilled)
        .unwrap();

    let rows = repo.sales_by_salesperson().unwrap();
    assert_eq!(rows.len(), 2);

    let asha_row = rows
        .iter()
        .find(|row| row.salesperson_name == "Asha")
        .unwrap();
    assert_eq!(asha_row.total_orders, 1);
    assert_eq!(asha_row.total_customers, 1);
    assert_eq!(asha_row.total_sales, 160.0);
    assert_eq!(asha_row.avg_sales_per_order, 160.0);

    // Zero-order salesperson still appears, with a guarded average.
    let ravi_row = rows
        .iter()
        .find(|row| row.salesperson_name == "Ravi")
        .unwrap();
    assert_eq!(ravi_row.total_orders, 0);
    assert_eq!(ravi_row.avg_sales_per_order, 0.0);
}
