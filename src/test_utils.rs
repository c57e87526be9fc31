//! Shared test utilities for the canteen ledger.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::menu::{Category, MenuItem},
    core::{account, cart, checkout},
    entities,
    entities::PaymentMethod,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a catalog item for tests without going through menu.toml.
///
/// # Defaults
/// * `category`: `Category::Veg`
/// * `available`: true
#[must_use]
pub fn test_menu_item(id: &str, price: i64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: format!("Test item {id}"),
        price,
        category: Category::Veg,
        description: "Test description".to_string(),
        image: format!("assets/{id}.jpg"),
        available: true,
    }
}

/// Registers a test account with a derived email, zero balance, zero points.
pub async fn create_test_account(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::account::Model> {
    let email = format!("{}@mec.edu", name.to_lowercase().replace(' ', "."));
    account::create_account(db, name.to_string(), email).await
}

/// Registers a test account and recharges it to the given balance.
pub async fn create_funded_account(
    db: &DatabaseConnection,
    name: &str,
    balance: i64,
) -> Result<entities::account::Model> {
    let created = create_test_account(db, name).await?;
    account::recharge(db, &created.id, balance).await
}

/// Sets up a complete test environment with one registered account.
/// Returns (db, account) for common test scenarios.
pub async fn setup_with_account() -> Result<(DatabaseConnection, entities::account::Model)> {
    let db = setup_test_db().await?;
    let account = create_test_account(&db, "Test Student").await?;
    Ok((db, account))
}

/// Sets up a funded account with one cart line checked out into a pending
/// order. Returns (db, account, order) for fulfillment tests.
pub async fn setup_with_order() -> Result<(
    DatabaseConnection,
    entities::account::Model,
    entities::order::Model,
)> {
    let db = setup_test_db().await?;
    let account = create_funded_account(&db, "Test Student", 500).await?;
    cart::add_to_cart(&db, &account.id, &test_menu_item("veg-001", 40), 1).await?;
    let order = checkout::checkout(&db, &account.id, PaymentMethod::Card).await?;
    Ok((db, account, order))
}
