//! Order entity - A durable snapshot of a paid-for cart.
//!
//! Orders are created atomically at checkout and are immutable afterwards
//! except for the `status` field, which the fulfillment pipeline advances
//! through `pending -> preparing -> ready -> delivered`. The line snapshot
//! lives in the `order_items` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fulfillment status of an order, in strict forward order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial state, set by checkout
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Staff started preparing the order
    #[sea_orm(string_value = "preparing")]
    Preparing,
    /// Ready for pickup at the counter
    #[sea_orm(string_value = "ready")]
    Ready,
    /// Terminal state, handed over to the student
    #[sea_orm(string_value = "delivered")]
    Delivered,
}

impl OrderStatus {
    /// Stable lowercase name, matching the stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an order was paid for. Only `Card` touches the account balance;
/// the other methods are simulated external wallets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Student card, debits the account balance
    #[sea_orm(string_value = "card")]
    Card,
    #[sea_orm(string_value = "gpay")]
    GPay,
    #[sea_orm(string_value = "phonepe")]
    PhonePe,
    #[sea_orm(string_value = "upi")]
    Upi,
}

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Account that placed the order
    pub account_id: String,
    /// Total amount, equal to the sum of line price x quantity
    pub total: i64,
    /// Payment method chosen at checkout
    pub payment_method: PaymentMethod,
    /// Current fulfillment status
    pub status: OrderStatus,
    /// Short numeric pickup token shown to the student
    pub token: String,
    /// When the order was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    /// One order has many line snapshots
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
