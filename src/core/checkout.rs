//! Checkout business logic - the one multi-entity transaction in the system.
//!
//! Converting a cart into an order must mutate several entities together:
//! the order and its line snapshot are created, the balance is debited when
//! the student card pays, loyalty points are credited, and the cart is
//! cleared. All of it runs inside a single database transaction so either
//! everything happens or nothing does.

use crate::{
    core::{account, cart, token},
    entities::{Account, CartItem, OrderItem, OrderStatus, PaymentMethod, cart_item, order,
        order_item},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::info;

/// Loyalty points credited on every successful order
pub const LOYALTY_BONUS_POINTS: i64 = 10;

/// Pays for the account's cart and converts it into a pending order.
///
/// When the payment method is the student card, the account balance must
/// cover the cart total and is debited by it; other methods are simulated
/// external wallets and leave the balance untouched. Every successful
/// checkout credits [`LOYALTY_BONUS_POINTS`] and clears the cart. The
/// returned order carries the generated pickup token.
///
/// # Errors
/// - `Error::EmptyCart` if the cart has no lines
/// - `Error::NoActiveAccount` if the account id does not resolve
/// - `Error::InsufficientBalance` if the card balance cannot cover the total
///
/// All failures leave every entity unchanged.
pub async fn checkout(
    db: &DatabaseConnection,
    account_id: &str,
    payment_method: PaymentMethod,
) -> Result<order::Model> {
    // Use a transaction to ensure atomicity; dropping it on any error path
    // rolls back everything written so far.
    let txn = db.begin().await?;

    let lines = cart::get_cart(&txn, account_id).await?;
    if lines.is_empty() {
        return Err(Error::EmptyCart);
    }

    let payer = Account::find_by_id(account_id)
        .one(&txn)
        .await?
        .ok_or(Error::NoActiveAccount)?;

    let total = cart::cart_total(&lines);

    if payment_method == PaymentMethod::Card && payer.balance < total {
        return Err(Error::InsufficientBalance {
            balance: payer.balance,
            required: total,
        });
    }

    let pickup_token = token::generate_order_token(&txn).await?;

    let created = order::ActiveModel {
        account_id: Set(account_id.to_string()),
        total: Set(total),
        payment_method: Set(payment_method),
        status: Set(OrderStatus::Pending),
        token: Set(pickup_token),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let snapshots = lines.iter().map(|line| order_item::ActiveModel {
        order_id: Set(created.id),
        item_id: Set(line.item_id.clone()),
        name: Set(line.name.clone()),
        price: Set(line.price),
        quantity: Set(line.quantity),
        category: Set(line.category.clone()),
        image: Set(line.image.clone()),
        ..Default::default()
    });
    OrderItem::insert_many(snapshots).exec(&txn).await?;

    let balance_delta = if payment_method == PaymentMethod::Card {
        -total
    } else {
        0
    };
    account::adjust_account_atomic(&txn, account_id, balance_delta, LOYALTY_BONUS_POINTS).await?;

    CartItem::delete_many()
        .filter(cart_item::Column::AccountId.eq(account_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    info!(
        account_id,
        order_id = created.id,
        total,
        token = %created.token,
        "checkout complete"
    );
    Ok(created)
}
