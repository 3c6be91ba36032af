use std::collections::{HashMap, HashSet};

use diesel::dsl::count_distinct;
use diesel::prelude::*;

use crate::domain::order::OrderStatus;
use crate::domain::sales::{SalesSummary, SalespersonSales, TopProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SalesReader};

/// Rollups are folded in application memory over flat joined rows; the data
/// set is small and the figures are recomputed on every request anyway.
impl SalesReader for DieselRepository {
    fn sales_summary(&self) -> RepositoryResult<SalesSummary> {
        use crate::schema::{order_items, orders, products};

        let mut conn = self.conn()?;

        let total_orders = orders::table.count().get_result::<i64>(&mut conn)?;

        let unique_customers = orders::table
            .select(count_distinct(orders::customer_id))
            .get_result::<i64>(&mut conn)?;

        let fulfilled_rows = order_items::table
            .inner_join(orders::table)
            .inner_join(products::table)
            .filter(orders::status.eq(OrderStatus::Fulfilled.as_str()))
            .select((products::name, order_items::quantity, order_items::unit_price))
            .load::<(String, i32, f64)>(&mut conn)?;

        let mut total_revenue = 0.0;
        let mut total_items_sold = 0i64;
        let mut quantity_by_product: HashMap<String, i64> = HashMap::new();

        for (product_name, quantity, unit_price) in fulfilled_rows {
            total_revenue += quantity as f64 * unit_price;
            total_items_sold += quantity as i64;
            *quantity_by_product.entry(product_name).or_default() += quantity as i64;
        }

        let mut top_products: Vec<TopProduct> = quantity_by_product
            .into_iter()
            .map(|(name, quantity_sold)| TopProduct {
                name,
                quantity_sold,
            })
            .collect();
        top_products.sort_by(|a, b| {
            b.quantity_sold
                .cmp(&a.quantity_sold)
                .then_with(|| a.name.cmp(&b.name))
        });
        top_products.truncate(5);

        Ok(SalesSummary {
            total_orders,
            total_revenue,
            total_items_sold,
            unique_customers,
            top_products,
        })
    }

    fn sales_by_salesperson(&self) -> RepositoryResult<Vec<SalespersonSales>> {
        use crate::schema::{order_items, orders, salespersons};

        let mut conn = self.conn()?;

        let names = salespersons::table
            .select((salespersons::id, salespersons::name))
            .order(salespersons::name.asc())
            .load::<(i32, String)>(&mut conn)?;

        // Item-less fulfilled orders still count towards the order totals,
        // so orders and item rows are fetched separately.
        let fulfilled_orders = orders::table
            .filter(orders::status.eq(OrderStatus::Fulfilled.as_str()))
            .select((orders::id, orders::salesperson_id, orders::customer_id))
            .load::<(i32, Option<i32>, i32)>(&mut conn)?;

        let item_rows = order_items::table
            .inner_join(orders::table)
            .filter(orders::status.eq(OrderStatus::Fulfilled.as_str()))
            .select((
                order_items::order_id,
                order_items::quantity,
                order_items::unit_price,
            ))
            .load::<(i32, i32, f64)>(&mut conn)?;

        let mut sales_by_order: HashMap<i32, f64> = HashMap::new();
        for (order_id, quantity, unit_price) in item_rows {
            *sales_by_order.entry(order_id).or_default() += quantity as f64 * unit_price;
        }

        let breakdown = names
            .into_iter()
            .map(|(salesperson_id, salesperson_name)| {
                let mut total_orders = 0i64;
                let mut customers: HashSet<i32> = HashSet::new();
                let mut total_sales = 0.0;

                for (order_id, order_salesperson, customer_id) in &fulfilled_orders {
                    if *order_salesperson != Some(salesperson_id) {
                        continue;
                    }
                    total_orders += 1;
                    customers.insert(*customer_id);
                    total_sales += sales_by_order.get(order_id).copied().unwrap_or(0.0);
                }

                let avg_sales_per_order = if total_orders == 0 {
                    0.0
                } else {
                    total_sales / total_orders as f64
                };

                SalespersonSales {
                    salesperson_name,
                    total_orders,
                    total_customers: customers.len() as i64,
                    total_sales,
                    avg_sales_per_order,
                }
            })
            .collect();

        Ok(breakdown)
    }
}
