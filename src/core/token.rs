//! Token generation - short numeric codes for pickup and follow-up.
//!
//! Tokens are fixed-width 5-digit decimal strings drawn uniformly from
//! 10000..=99999. Order tokens are additionally checked for collisions
//! against currently open (non-delivered) orders, so two orders waiting at
//! the counter can never show the same code.

use crate::entities::{Order, OrderStatus, order};
use crate::errors::{Error, Result};
use rand::Rng;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

/// Lowest token value (inclusive)
pub const TOKEN_MIN: u32 = 10_000;
/// Highest token value (inclusive)
pub const TOKEN_MAX: u32 = 99_999;

/// Collision retry budget for order tokens
const MAX_ATTEMPTS: u32 = 32;

/// Draws a random 5-digit token with no uniqueness guarantee.
///
/// Used directly for feedback follow-up tokens; order tokens go through
/// [`generate_order_token`] instead.
#[must_use]
pub fn random_token() -> String {
    rand::rng().random_range(TOKEN_MIN..=TOKEN_MAX).to_string()
}

/// Returns whether an open (non-delivered) order currently shows this token.
///
/// Delivered orders do not reserve their token: the code only needs to be
/// unambiguous among orders still waiting at the counter.
pub async fn token_in_use<C>(db: &C, token: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    let clash = Order::find()
        .filter(order::Column::Token.eq(token))
        .filter(order::Column::Status.ne(OrderStatus::Delivered))
        .one(db)
        .await?;
    Ok(clash.is_some())
}

/// Generates a pickup token that no open order currently uses, redrawing
/// on collision.
///
/// # Errors
/// Returns `Error::TokenExhausted` if the retry budget is spent without
/// finding a free token, or a database error if the collision check fails.
pub async fn generate_order_token<C>(db: &C) -> Result<String>
where
    C: ConnectionTrait,
{
    for _ in 0..MAX_ATTEMPTS {
        let candidate = random_token();
        if !token_in_use(db, &candidate).await? {
            return Ok(candidate);
        }
    }

    Err(Error::TokenExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::PaymentMethod;
    use crate::test_utils::setup_test_db;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn open_order_with_token(token: &str) -> order::Model {
        order::Model {
            id: 1,
            account_id: "MEC1001".to_string(),
            total: 40,
            payment_method: PaymentMethod::Card,
            status: OrderStatus::Pending,
            token: token.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_random_token_is_fixed_width_numeric() {
        for _ in 0..100 {
            let token = random_token();
            assert_eq!(token.len(), 5);
            let value: u32 = token.parse().unwrap();
            assert!((TOKEN_MIN..=TOKEN_MAX).contains(&value));
        }
    }

    #[tokio::test]
    async fn test_generate_order_token_on_empty_store() -> Result<()> {
        let db = setup_test_db().await?;

        let token = generate_order_token(&db).await?;
        assert_eq!(token.len(), 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_order_token_redraws_after_collision() -> Result<()> {
        // First draw clashes with an open order, the second one is free
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![open_order_with_token("12345")], vec![]])
            .into_connection();

        let token = generate_order_token(&db).await?;
        assert_eq!(token.len(), 5);
        assert!(token.parse::<u32>().is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_order_token_exhausts_retry_budget() -> Result<()> {
        // Every draw clashes with an open order
        let clash = open_order_with_token("12345");
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results((0..MAX_ATTEMPTS).map(|_| vec![clash.clone()]))
            .into_connection();

        let result = generate_order_token(&db).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::TokenExhausted {
                attempts: MAX_ATTEMPTS
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delivered_orders_release_their_token() -> Result<()> {
        use crate::core::fulfillment;
        use crate::test_utils::setup_with_order;

        let (db, _account, order) = setup_with_order().await?;
        assert!(token_in_use(&db, &order.token).await?);

        fulfillment::start_preparing(&db, order.id).await?;
        fulfillment::mark_ready(&db, order.id).await?;
        fulfillment::mark_delivered(&db, order.id).await?;

        // Once delivered, the code may be handed out again
        assert!(!token_in_use(&db, &order.token).await?);

        Ok(())
    }
}
