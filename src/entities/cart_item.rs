//! Cart item entity - One line of an account's open cart.
//!
//! The cart accumulates purchase intent before an order exists. At most one
//! line exists per (account, catalog item) pair; quantities are summed on
//! repeated adds. Checkout converts the lines into an order snapshot and
//! deletes them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cart line database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    /// Unique identifier for the line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Account whose cart this line belongs to
    pub account_id: String,
    /// Catalog item identifier
    pub item_id: String,
    /// Item name snapshot at time of add
    pub name: String,
    /// Unit price snapshot in whole currency units
    pub price: i64,
    /// Quantity, always positive (a line at zero is removed instead)
    pub quantity: i32,
    /// Category snapshot
    pub category: String,
    /// Image reference snapshot
    pub image: String,
}

/// Defines relationships between `CartItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each cart line belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
