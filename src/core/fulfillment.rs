//! Fulfillment business logic - advances orders through the pickup pipeline.
//!
//! Statuses move in strict forward order, `pending -> preparing -> ready ->
//! delivered`, with no skipping and no reverse transitions. Each step is an
//! explicit staff action. Transitions are applied with a compare-and-swap on
//! the status column, so a retried action never double-applies: re-sending a
//! transition whose target state already holds returns the order unchanged,
//! while any other out-of-order attempt fails with `InvalidTransition`.

use crate::{
    entities::{Order, OrderItem, OrderStatus, order, order_item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};
use tracing::info;

/// Moves a pending order into preparation.
///
/// # Errors
/// Returns `Error::OrderNotFound` for an unknown id and
/// `Error::InvalidTransition` if the order is not pending (unless it is
/// already preparing, which is treated as a retry).
pub async fn start_preparing(db: &DatabaseConnection, order_id: i64) -> Result<order::Model> {
    advance(db, order_id, OrderStatus::Pending, OrderStatus::Preparing, "start preparing").await
}

/// Marks a preparing order as ready for pickup.
///
/// # Errors
/// Returns `Error::OrderNotFound` for an unknown id and
/// `Error::InvalidTransition` if the order is not preparing (unless it is
/// already ready, which is treated as a retry).
pub async fn mark_ready(db: &DatabaseConnection, order_id: i64) -> Result<order::Model> {
    advance(db, order_id, OrderStatus::Preparing, OrderStatus::Ready, "mark ready").await
}

/// Marks a ready order as delivered. Delivered is terminal.
///
/// # Errors
/// Returns `Error::OrderNotFound` for an unknown id and
/// `Error::InvalidTransition` if the order is not ready (unless it is
/// already delivered, which is treated as a retry).
pub async fn mark_delivered(db: &DatabaseConnection, order_id: i64) -> Result<order::Model> {
    advance(db, order_id, OrderStatus::Ready, OrderStatus::Delivered, "mark delivered").await
}

/// Applies one forward transition as a compare-and-swap on the status column:
/// `UPDATE orders SET status = target WHERE id = ? AND status = expected`.
async fn advance(
    db: &DatabaseConnection,
    order_id: i64,
    expected: OrderStatus,
    target: OrderStatus,
    action: &'static str,
) -> Result<order::Model> {
    use sea_orm::sea_query::Expr;

    let swapped = Order::update_many()
        .col_expr(order::Column::Status, Expr::value(target))
        .filter(order::Column::Id.eq(order_id))
        .filter(order::Column::Status.eq(expected))
        .exec(db)
        .await?;

    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if swapped.rows_affected == 1 {
        info!(order_id, status = %order.status, "order advanced");
        return Ok(order);
    }

    // The swap did not apply. A retry of an already-applied transition is
    // idempotent; anything else is out of order.
    if order.status == target {
        return Ok(order);
    }

    Err(Error::InvalidTransition {
        from: order.status,
        action,
    })
}

/// Retrieves a specific order by its unique ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Retrieves all orders, most recent first.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the orders currently in a given status, most recent first.
/// Used by the staff board to show one column per pipeline stage.
pub async fn get_orders_by_status(
    db: &DatabaseConnection,
    status: OrderStatus,
) -> Result<Vec<order::Model>> {
    Order::find()
        .filter(order::Column::Status.eq(status))
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves an account's order history, most recent first.
pub async fn get_orders_for_account(
    db: &DatabaseConnection,
    account_id: &str,
) -> Result<Vec<order::Model>> {
    Order::find()
        .filter(order::Column::AccountId.eq(account_id))
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the line snapshot of an order, in purchase order.
pub async fn get_order_items(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Vec<order_item::Model>> {
    OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
