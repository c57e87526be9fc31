//! Account business logic - registration, lookups, and administration.
//!
//! Provides functions for registering students, resolving accounts, and the
//! administration recharge path. Balance and point changes go through an
//! atomic database-level update rather than read-modify-write, so concurrent
//! mutations cannot lose updates.

use crate::{
    entities::{Account, account},
    errors::{Error, Result},
};
use rand::Rng;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Retry budget for generating an unused student id
const MAX_ID_ATTEMPTS: u32 = 32;

/// Retrieves all accounts, ordered by registration time (insertion order).
/// Ties on the timestamp (e.g., batch-seeded rows) fall back to the id so
/// the ordering stays deterministic.
pub async fn get_all_accounts(db: &DatabaseConnection) -> Result<Vec<account::Model>> {
    Account::find()
        .order_by_asc(account::Column::CreatedAt)
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an account by its student id, returning None if not found.
pub async fn get_account_by_id(
    db: &DatabaseConnection,
    account_id: &str,
) -> Result<Option<account::Model>> {
    Account::find_by_id(account_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Registers a new student account with a fresh `MEC`-prefixed id.
///
/// Name and email are validated to be non-empty; the new account starts
/// with zero balance and zero loyalty points.
///
/// # Errors
/// Returns an error if:
/// - The name or email is empty or whitespace-only
/// - An unused id cannot be generated within the retry budget
/// - The database insert fails
pub async fn create_account(
    db: &DatabaseConnection,
    name: String,
    email: String,
) -> Result<account::Model> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput { field: "name" });
    }
    if email.trim().is_empty() {
        return Err(Error::InvalidInput { field: "email" });
    }

    let id = generate_account_id(db).await?;

    let model = account::ActiveModel {
        id: Set(id),
        name: Set(name.trim().to_string()),
        email: Set(email.trim().to_string()),
        balance: Set(0),
        points: Set(0),
        created_at: Set(chrono::Utc::now()),
    };

    let created = model.insert(db).await?;
    info!(account_id = %created.id, "registered new account");
    Ok(created)
}

/// Credits an account's balance by a positive amount (administration path).
///
/// # Errors
/// Returns `Error::InvalidAmount` if the amount is zero or negative,
/// `Error::AccountNotFound` if the id does not resolve.
pub async fn recharge(
    db: &DatabaseConnection,
    account_id: &str,
    amount: i64,
) -> Result<account::Model> {
    if amount <= 0 {
        return Err(Error::InvalidAmount { amount });
    }

    let updated = adjust_account_atomic(db, account_id, amount, 0).await?;
    info!(account_id, amount, "recharged account balance");
    Ok(updated)
}

/// Applies balance and point deltas to an account as one atomic update.
///
/// Instead of reading the current values, modifying them, and writing them
/// back (which can lose updates in concurrent scenarios), this uses a single
/// SQL UPDATE with column expressions:
/// `UPDATE accounts SET balance = balance + ?, points = points + ? WHERE id = ?`
///
/// # Errors
/// Returns `Error::AccountNotFound` if the id does not resolve.
pub async fn adjust_account_atomic<C>(
    db: &C,
    account_id: &str,
    balance_delta: i64,
    points_delta: i64,
) -> Result<account::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    // First verify the account exists
    Account::find_by_id(account_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            id: account_id.to_string(),
        })?;

    Account::update_many()
        .col_expr(
            account::Column::Balance,
            Expr::col(account::Column::Balance).add(balance_delta),
        )
        .col_expr(
            account::Column::Points,
            Expr::col(account::Column::Points).add(points_delta),
        )
        .filter(account::Column::Id.eq(account_id))
        .exec(db)
        .await?;

    // Return the updated account
    Account::find_by_id(account_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            id: account_id.to_string(),
        })
}

/// Draws `MEC1000`..`MEC9999` ids until one is unused.
async fn generate_account_id(db: &DatabaseConnection) -> Result<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = format!("MEC{}", rand::rng().random_range(1000..=9999));
        if Account::find_by_id(&candidate).one(db).await?.is_none() {
            return Ok(candidate);
        }
    }

    Err(Error::TokenExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}
