//! Demo account seeding for first run.
//!
//! When the accounts table is empty, a small roster of demo students is
//! inserted so the system is usable immediately. Existing data is never
//! touched.

use crate::entities::{Account, account};
use crate::errors::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect, Set};
use tracing::info;

/// Demo roster: (id, name, email, balance, points).
const DEMO_ACCOUNTS: &[(&str, &str, &str, i64, i64)] = &[
    ("MEC1001", "Rahul Kumar", "rahul@mec.edu", 500, 50),
    ("MEC1002", "Priya Sharma", "priya@mec.edu", 750, 80),
    ("MEC1003", "Arjun Patel", "arjun@mec.edu", 300, 30),
    ("MEC1004", "Sneha Reddy", "sneha@mec.edu", 600, 60),
    ("MEC1005", "Vikram Singh", "vikram@mec.edu", 450, 40),
    ("MEC1006", "Anjali Menon", "anjali@mec.edu", 800, 90),
];

/// Seeds the demo student roster if the accounts table is empty.
///
/// # Errors
/// Returns an error if the database queries fail.
pub async fn seed_demo_accounts(db: &DatabaseConnection) -> Result<()> {
    let existing = Account::find().limit(1).all(db).await?;
    if !existing.is_empty() {
        return Ok(());
    }

    let now = chrono::Utc::now();
    let models = DEMO_ACCOUNTS
        .iter()
        .map(|(id, name, email, balance, points)| account::ActiveModel {
            id: Set((*id).to_string()),
            name: Set((*name).to_string()),
            email: Set((*email).to_string()),
            balance: Set(*balance),
            points: Set(*points),
            created_at: Set(now),
        });

    Account::insert_many(models).exec(db).await?;
    info!("Seeded {} demo accounts", DEMO_ACCOUNTS.len());
    Ok(())
}
