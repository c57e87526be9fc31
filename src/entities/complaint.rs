//! Complaint entity - A student-submitted issue report.
//!
//! Complaints are append-only from the student side; administration may
//! mark them resolved. Anonymous submissions carry the `"guest"` marker
//! instead of an account identifier.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of a complaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    /// Awaiting administration review
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Reviewed and closed by administration
    #[sea_orm(string_value = "resolved")]
    Resolved,
}

/// Complaint database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    /// Unique identifier for the complaint
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Submitting account id, or `"guest"` for anonymous submissions
    pub account_id: String,
    /// Name given by the submitter
    pub name: String,
    /// Free-text description of the issue
    pub description: String,
    /// Review status
    pub status: ComplaintStatus,
    /// When the complaint was submitted
    pub created_at: DateTimeUtc,
}

/// Complaints have no foreign-key relationships: the account reference is a
/// loose string so anonymous (`"guest"`) submissions remain representable.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
