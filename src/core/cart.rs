//! Cart business logic - accumulates purchase intent before an order exists.
//!
//! Cart lines snapshot the catalog item's display fields at time of add and
//! keep at most one line per item id. Totals and counts are pure functions
//! over the lines, never stored. The cart is scoped to an account and is
//! cleared on successful checkout or logout.

use crate::{
    config::menu::MenuItem,
    entities::{CartItem, cart_item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Adds an item to the account's cart, summing the quantity into an
/// existing line for the same item id or appending a new snapshot line.
///
/// # Errors
/// Returns `Error::InvalidQuantity` if the quantity is less than 1, or a
/// database error if the write fails.
pub async fn add_to_cart(
    db: &DatabaseConnection,
    account_id: &str,
    item: &MenuItem,
    quantity: i32,
) -> Result<cart_item::Model> {
    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let existing = find_line(db, account_id, &item.id).await?;

    match existing {
        Some(line) => {
            let summed = line.quantity + quantity;
            let mut active: cart_item::ActiveModel = line.into();
            active.quantity = Set(summed);
            active.update(db).await.map_err(Into::into)
        }
        None => {
            let line = cart_item::ActiveModel {
                account_id: Set(account_id.to_string()),
                item_id: Set(item.id.clone()),
                name: Set(item.name.clone()),
                price: Set(item.price),
                quantity: Set(quantity),
                category: Set(item.category.as_str().to_string()),
                image: Set(item.image.clone()),
                ..Default::default()
            };
            line.insert(db).await.map_err(Into::into)
        }
    }
}

/// Replaces the quantity of an existing line. A quantity of zero or less
/// removes the line entirely; an unknown item id is a no-op.
pub async fn set_quantity(
    db: &DatabaseConnection,
    account_id: &str,
    item_id: &str,
    quantity: i32,
) -> Result<()> {
    let Some(line) = find_line(db, account_id, item_id).await? else {
        return Ok(());
    };

    if quantity <= 0 {
        line.delete(db).await?;
        return Ok(());
    }

    let mut active: cart_item::ActiveModel = line.into();
    active.quantity = Set(quantity);
    active.update(db).await?;
    Ok(())
}

/// Removes a line from the cart. Removing an absent item id is a no-op.
pub async fn remove_from_cart(
    db: &DatabaseConnection,
    account_id: &str,
    item_id: &str,
) -> Result<()> {
    CartItem::delete_many()
        .filter(cart_item::Column::AccountId.eq(account_id))
        .filter(cart_item::Column::ItemId.eq(item_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Empties the account's cart.
pub async fn clear_cart<C>(db: &C, account_id: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    CartItem::delete_many()
        .filter(cart_item::Column::AccountId.eq(account_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Retrieves the account's cart lines in insertion order.
pub async fn get_cart<C>(db: &C, account_id: &str) -> Result<Vec<cart_item::Model>>
where
    C: ConnectionTrait,
{
    CartItem::find()
        .filter(cart_item::Column::AccountId.eq(account_id))
        .order_by_asc(cart_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sum over lines of price x quantity. Pure derived value, never stored.
#[must_use]
pub fn cart_total(lines: &[cart_item::Model]) -> i64 {
    lines
        .iter()
        .map(|line| line.price * i64::from(line.quantity))
        .sum()
}

/// Sum of line quantities. Pure derived value, never stored.
#[must_use]
pub fn cart_count(lines: &[cart_item::Model]) -> i64 {
    lines.iter().map(|line| i64::from(line.quantity)).sum()
}

async fn find_line(
    db: &DatabaseConnection,
    account_id: &str,
    item_id: &str,
) -> Result<Option<cart_item::Model>> {
    CartItem::find()
        .filter(cart_item::Column::AccountId.eq(account_id))
        .filter(cart_item::Column::ItemId.eq(item_id))
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_add_to_cart_rejects_non_positive_quantity() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let item = test_menu_item("veg-001", 40);

        let result = add_to_cart(&db, "MEC1001", &item, 0).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: 0 }
        ));

        let result = add_to_cart(&db, "MEC1001", &item, -3).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: -3 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_snapshots_item_fields() -> Result<()> {
        let (db, account) = setup_with_account().await?;
        let item = test_menu_item("veg-002", 60);

        let line = add_to_cart(&db, &account.id, &item, 2).await?;

        assert_eq!(line.item_id, "veg-002");
        assert_eq!(line.name, item.name);
        assert_eq!(line.price, 60);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.category, item.category.as_str());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_sums_into_existing_line() -> Result<()> {
        let (db, account) = setup_with_account().await?;
        let item = test_menu_item("veg-001", 40);

        add_to_cart(&db, &account.id, &item, 1).await?;
        add_to_cart(&db, &account.id, &item, 2).await?;

        let lines = get_cart(&db, &account.id).await?;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_quantity_replaces_and_removes() -> Result<()> {
        let (db, account) = setup_with_account().await?;
        let item = test_menu_item("snack-001", 20);

        add_to_cart(&db, &account.id, &item, 2).await?;

        // Replace
        set_quantity(&db, &account.id, "snack-001", 5).await?;
        let lines = get_cart(&db, &account.id).await?;
        assert_eq!(lines[0].quantity, 5);

        // Zero removes the line, it is not retained
        set_quantity(&db, &account.id, "snack-001", 0).await?;
        assert!(get_cart(&db, &account.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_set_quantity_negative_removes_line() -> Result<()> {
        let (db, account) = setup_with_account().await?;
        let item = test_menu_item("snack-002", 30);

        add_to_cart(&db, &account.id, &item, 1).await?;
        set_quantity(&db, &account.id, "snack-002", -1).await?;

        assert!(get_cart(&db, &account.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_set_quantity_unknown_item_is_noop() -> Result<()> {
        let (db, account) = setup_with_account().await?;

        set_quantity(&db, &account.id, "veg-404", 3).await?;
        assert!(get_cart(&db, &account.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_cart_is_idempotent() -> Result<()> {
        let (db, account) = setup_with_account().await?;
        let item = test_menu_item("juice-001", 60);

        add_to_cart(&db, &account.id, &item, 1).await?;
        remove_from_cart(&db, &account.id, "juice-001").await?;
        remove_from_cart(&db, &account.id, "juice-001").await?;

        assert!(get_cart(&db, &account.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_cart() -> Result<()> {
        let (db, account) = setup_with_account().await?;

        add_to_cart(&db, &account.id, &test_menu_item("veg-001", 40), 1).await?;
        add_to_cart(&db, &account.id, &test_menu_item("veg-002", 60), 2).await?;

        clear_cart(&db, &account.id).await?;
        assert!(get_cart(&db, &account.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_carts_are_scoped_per_account() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_account(&db, "First Student").await?;
        let second = create_test_account(&db, "Second Student").await?;

        add_to_cart(&db, &first.id, &test_menu_item("veg-001", 40), 1).await?;
        add_to_cart(&db, &second.id, &test_menu_item("veg-002", 60), 2).await?;

        clear_cart(&db, &first.id).await?;

        assert!(get_cart(&db, &first.id).await?.is_empty());
        assert_eq!(get_cart(&db, &second.id).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_total_and_count() -> Result<()> {
        let (db, account) = setup_with_account().await?;

        add_to_cart(&db, &account.id, &test_menu_item("veg-001", 40), 1).await?;
        add_to_cart(&db, &account.id, &test_menu_item("snack-001", 30), 2).await?;

        let lines = get_cart(&db, &account.id).await?;
        assert_eq!(cart_total(&lines), 40 + 30 * 2);
        assert_eq!(cart_count(&lines), 3);

        Ok(())
    }

    #[test]
    fn test_cart_total_of_empty_cart_is_zero() {
        assert_eq!(cart_total(&[]), 0);
        assert_eq!(cart_count(&[]), 0);
    }
}
