use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
    OrderListQuery, OrderStatus,
};
use crate::models::order::{
    NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
    OrderItem as DbOrderItem,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

/// Resolve catalog prices for a batch of incoming items and turn them into
/// insertable rows. Fails with `NotFound` when any referenced product is
/// missing, which aborts the surrounding transaction.
fn resolve_item_rows(
    conn: &mut SqliteConnection,
    order_id: i32,
    items: &[DomainNewOrderItem],
) -> RepositoryResult<Vec<DbNewOrderItem>> {
    use crate::schema::products;

    let product_ids: Vec<i32> = items.iter().map(|item| item.product_id).collect();

    let prices: HashMap<i32, f64> = products::table
        .filter(products::id.eq_any(&product_ids))
        .select((products::id, products::base_price))
        .load::<(i32, f64)>(conn)?
        .into_iter()
        .collect();

    items
        .iter()
        .map(|item| {
            let unit_price = prices
                .get(&item.product_id)
                .copied()
                .ok_or(RepositoryError::NotFound)?;
            Ok(DbNewOrderItem::from_domain(order_id, unit_price, item))
        })
        .collect()
}

fn load_items(conn: &mut SqliteConnection, order_id: i32) -> QueryResult<Vec<DbOrderItem>> {
    use crate::schema::order_items;

    order_items::table
        .filter(order_items::order_id.eq(order_id))
        .order(order_items::id.asc())
        .load::<DbOrderItem>(conn)
}

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = load_items(&mut conn, order.id)?;

        Ok(Some(DomainOrder::from((order, items))))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let OrderListQuery {
            status,
            customer_id,
            salesperson_id,
        } = query;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = status {
            items = items.filter(orders::status.eq(status.as_str()));
        }

        if let Some(customer) = customer_id {
            items = items.filter(orders::customer_id.eq(customer));
        }

        if let Some(salesperson) = salesperson_id {
            items = items.filter(orders::salesperson_id.eq(Some(salesperson)));
        }

        let db_orders = items
            .order(orders::created_at.desc())
            .load::<DbOrder>(&mut conn)?;

        if db_orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();

        let rows = order_items::table
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        let mut items_by_order: HashMap<i32, Vec<DbOrderItem>> = HashMap::new();
        for item in rows {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let orders = db_orders
            .into_iter()
            .map(|order| {
                let order_id = order.id;
                let items = items_by_order.remove(&order_id).unwrap_or_default();
                DomainOrder::from((order, items))
            })
            .collect();

        Ok(orders)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let db_new = DbNewOrder::from(new_order);

            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;

            let order_id = created.id;

            let payload = resolve_item_rows(conn, order_id, &new_order.items)?;

            if !payload.is_empty() {
                diesel::insert_into(order_items::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let items = load_items(conn, order_id)?;

            Ok(DomainOrder::from((created, items)))
        })
    }

    fn replace_order_items(
        &self,
        order_id: i32,
        items: &[DomainNewOrderItem],
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            // Resolve prices before deleting so a bad batch leaves the
            // existing items untouched even without the rollback.
            let payload = resolve_item_rows(conn, order_id, items)?;

            diesel::delete(order_items::table.filter(order_items::order_id.eq(order_id)))
                .execute(conn)?;

            if !payload.is_empty() {
                diesel::insert_into(order_items::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let items = load_items(conn, order_id)?;

            Ok(DomainOrder::from((order, items)))
        })
    }

    fn update_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(orders::status.eq(status.as_str()))
            .get_result::<DbOrder>(&mut conn)?;

        let items = load_items(&mut conn, order_id)?;

        Ok(DomainOrder::from((updated, items)))
    }

    fn update_order_notes(
        &self,
        order_id: i32,
        notes: Option<&str>,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(orders::notes.eq(notes))
            .get_result::<DbOrder>(&mut conn)?;

        let items = load_items(&mut conn, order_id)?;

        Ok(DomainOrder::from((updated, items)))
    }

    fn update_item_price(
        &self,
        order_id: i32,
        product_id: i32,
        negotiated_price: f64,
    ) -> RepositoryResult<()> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            order_items::table
                .filter(order_items::order_id.eq(order_id))
                .filter(order_items::product_id.eq(product_id)),
        )
        .set(order_items::negotiated_price.eq(negotiated_price))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
