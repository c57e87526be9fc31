//! Account entity - Represents a student's balance and loyalty record.
//!
//! Each account carries a stable student identifier, contact details, a
//! monetary balance in whole currency units, and a loyalty point count.
//! Order history is not stored here; it is derived by querying orders.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Stable student identifier (e.g., `"MEC1001"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name of the student
    pub name: String,
    /// Contact email
    pub email: String,
    /// Current balance in whole currency units, never negative
    pub balance: i64,
    /// Loyalty point count, never negative
    pub points: i64,
    /// When the account was registered
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One account has many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    /// One account has many cart lines (the open cart for its session)
    #[sea_orm(has_many = "super::cart_item::Entity")]
    CartItems,
    /// One account has many feedback submissions
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedback,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedback.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
