use crate::domain::order::{Order, OrderListQuery};
use crate::forms::orders::{
    CreateOrderForm, ReplaceItemsForm, UpdateItemPriceForm, UpdateNotesForm, UpdateStatusForm,
};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};
use validator::Validate;

/// Creates an order with its items in a single write. The payload is fully
/// validated before the repository is touched.
pub fn create_order<R>(repo: &R, form: CreateOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let new_order = form
        .into_new_order()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_order(&new_order).map_err(ServiceError::from)
}

/// Creates an order on behalf of an authenticated salesperson. The
/// salesperson id always comes from the verified claims, never from the
/// payload.
pub fn create_order_for_salesperson<R>(
    repo: &R,
    salesperson_id: i32,
    mut form: CreateOrderForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    form.salesperson_id = Some(salesperson_id);
    create_order(repo, form)
}

/// Replaces the item set of an order atomically. A bad batch leaves the
/// stored items exactly as they were.
pub fn replace_items<R>(repo: &R, order_id: i32, form: ReplaceItemsForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let items = form
        .into_items()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.replace_order_items(order_id, &items)
        .map_err(ServiceError::from)
}

/// Moves an order to a new status.
pub fn change_status<R>(repo: &R, order_id: i32, form: UpdateStatusForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let status = form
        .into_status()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_order_status(order_id, status)
        .map_err(ServiceError::from)
}

/// Sets or clears the free-form note on an order. Blank input clears it.
pub fn update_notes<R>(repo: &R, order_id: i32, form: UpdateNotesForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let note = form
        .note
        .as_deref()
        .map(str::trim)
        .filter(|note| !note.is_empty());

    repo.update_order_notes(order_id, note)
        .map_err(ServiceError::from)
}

/// Adjusts the negotiated price of a single order line.
pub fn update_item_price<R>(
    repo: &R,
    order_id: i32,
    product_id: i32,
    form: UpdateItemPriceForm,
) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_item_price(order_id, product_id, form.negotiated_price)
        .map_err(ServiceError::from)
}

/// Loads a single order with its items.
pub fn get_order<R>(repo: &R, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Lists orders matching the query, newest first.
pub fn list_orders<R>(repo: &R, query: OrderListQuery) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    repo.list_orders(query).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::order::{OrderItem, OrderStatus};
    use crate::forms::orders::OrderItemPayload;
    use crate::repository::mock::{MockOrderReader, MockOrderWriter};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .unwrap_or_default()
    }

    fn sample_order(id: i32, items: Vec<OrderItem>) -> Order {
        Order {
            id,
            customer_id: 3,
            salesperson_id: Some(2),
            status: OrderStatus::Pending,
            notes: None,
            items,
            created_at: fixed_datetime(),
        }
    }

    fn payload(product_id: i32, quantity: i32) -> OrderItemPayload {
        OrderItemPayload {
            product_id,
            quantity,
            negotiated_price: 100.0,
        }
    }

    #[test]
    fn create_order_rejects_empty_items_without_touching_repo() {
        // No expectations set: any repository call would panic.
        let repo = MockOrderWriter::new();
        let form = CreateOrderForm {
            customer_id: 3,
            salesperson_id: None,
            notes: None,
            items: Vec::new(),
        };

        let result = create_order(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_order_persists_validated_payload() {
        let mut repo = MockOrderWriter::new();

        repo.expect_create_order()
            .times(1)
            .withf(|new_order| {
                assert_eq!(new_order.customer_id, 3);
                assert_eq!(new_order.items.len(), 2);
                true
            })
            .returning(|_| Ok(sample_order(12, Vec::new())));

        let form = CreateOrderForm {
            customer_id: 3,
            salesperson_id: None,
            notes: None,
            items: vec![payload(1, 2), payload(4, 1)],
        };

        let order = create_order(&repo, form).expect("expected success");

        assert_eq!(order.id, 12);
    }

    #[test]
    fn create_order_for_salesperson_overrides_payload_id() {
        let mut repo = MockOrderWriter::new();

        repo.expect_create_order()
            .times(1)
            .withf(|new_order| {
                // The claims id wins even when the payload names another one.
                assert_eq!(new_order.salesperson_id, Some(2));
                true
            })
            .returning(|_| Ok(sample_order(12, Vec::new())));

        let form = CreateOrderForm {
            customer_id: 3,
            salesperson_id: Some(99),
            notes: None,
            items: vec![payload(1, 2)],
        };

        let order = create_order_for_salesperson(&repo, 2, form).expect("expected success");

        assert_eq!(order.id, 12);
    }

    #[test]
    fn replace_items_rejects_invalid_batch_without_touching_repo() {
        let repo = MockOrderWriter::new();
        let form = ReplaceItemsForm {
            items: vec![payload(1, 2), payload(4, 0)],
        };

        let result = replace_items(&repo, 12, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn change_status_rejects_unknown_vocabulary() {
        let repo = MockOrderWriter::new();
        let form = UpdateStatusForm {
            status: "Shipped".to_string(),
        };

        let result = change_status(&repo, 12, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn change_status_updates_order() {
        let mut repo = MockOrderWriter::new();

        repo.expect_update_order_status()
            .times(1)
            .withf(|order_id, status| {
                assert_eq!(*order_id, 12);
                assert_eq!(*status, OrderStatus::Fulfilled);
                true
            })
            .returning(|_, _| {
                let mut order = sample_order(12, Vec::new());
                order.status = OrderStatus::Fulfilled;
                Ok(order)
            });

        let form = UpdateStatusForm {
            status: "Fulfilled".to_string(),
        };

        let order = change_status(&repo, 12, form).expect("expected success");

        assert_eq!(order.status, OrderStatus::Fulfilled);
    }

    #[test]
    fn update_notes_clears_blank_input() {
        let mut repo = MockOrderWriter::new();

        repo.expect_update_order_notes()
            .times(1)
            .withf(|order_id, note| {
                assert_eq!(*order_id, 12);
                assert!(note.is_none());
                true
            })
            .returning(|_, _| Ok(sample_order(12, Vec::new())));

        let form = UpdateNotesForm {
            note: Some("   ".to_string()),
        };

        assert!(update_notes(&repo, 12, form).is_ok());
    }

    #[test]
    fn update_item_price_rejects_negative_value() {
        let repo = MockOrderWriter::new();
        let form = UpdateItemPriceForm {
            negotiated_price: -1.0,
        };

        let result = update_item_price(&repo, 12, 4, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn get_order_maps_missing_row_to_not_found() {
        let mut repo = MockOrderReader::new();

        repo.expect_get_order_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_order(&repo, 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
