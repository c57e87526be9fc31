//! Feedback entity - A one-shot rating and comment from a student.
//!
//! Feedback records are immutable once created. Each carries a generated
//! follow-up token and the fixed pair of respondent role tags.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feedback database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    /// Unique identifier for the feedback entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Submitting account id
    pub account_id: String,
    /// Rating from 1 to 5 inclusive
    pub rating: i32,
    /// Free-text comment
    pub comment: String,
    /// Generated follow-up token
    pub token: String,
    /// Comma-joined respondent role tags (fixed at submission)
    pub respondents: String,
    /// When the feedback was submitted
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Feedback and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each feedback entry belongs to one account
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
