//! Order item entity - One line of an order's cart snapshot.
//!
//! Lines copy the catalog item's display fields at purchase time so that
//! later catalog changes cannot affect an existing order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order line database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    /// Unique identifier for the line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Order this line belongs to
    pub order_id: i64,
    /// Catalog item identifier at time of purchase
    pub item_id: String,
    /// Item name snapshot
    pub name: String,
    /// Unit price snapshot in whole currency units
    pub price: i64,
    /// Quantity purchased, always positive
    pub quantity: i32,
    /// Category snapshot (e.g., `"veg"`, `"snacks"`)
    pub category: String,
    /// Image reference snapshot
    pub image: String,
}

/// Defines relationships between `OrderItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
