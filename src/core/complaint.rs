//! Complaint business logic - intake and administration review.
//!
//! Complaints are append-only writes keyed by the submitting account, or by
//! the anonymous marker when no session is active. Administration may mark
//! a complaint resolved; there is no further state machine.

use crate::{
    entities::{Complaint, ComplaintStatus, complaint},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Account marker recorded when a complaint is submitted without a session
pub const ANONYMOUS_ACCOUNT: &str = "guest";

/// Submits a new complaint. `account_id` of None records the anonymous
/// marker instead.
///
/// # Errors
/// Returns `Error::InvalidInput` if the name or description is empty.
pub async fn submit_complaint(
    db: &DatabaseConnection,
    account_id: Option<&str>,
    name: String,
    description: String,
) -> Result<complaint::Model> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput { field: "name" });
    }
    if description.trim().is_empty() {
        return Err(Error::InvalidInput {
            field: "description",
        });
    }

    let model = complaint::ActiveModel {
        account_id: Set(account_id.unwrap_or(ANONYMOUS_ACCOUNT).to_string()),
        name: Set(name.trim().to_string()),
        description: Set(description.trim().to_string()),
        status: Set(ComplaintStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Marks a complaint resolved (administration path). Resolving an already
/// resolved complaint is a harmless retry.
///
/// # Errors
/// Returns `Error::ComplaintNotFound` if the id does not resolve.
pub async fn resolve_complaint(
    db: &DatabaseConnection,
    complaint_id: i64,
) -> Result<complaint::Model> {
    let found = Complaint::find_by_id(complaint_id)
        .one(db)
        .await?
        .ok_or(Error::ComplaintNotFound { id: complaint_id })?;

    if found.status == ComplaintStatus::Resolved {
        return Ok(found);
    }

    let mut active: complaint::ActiveModel = found.into();
    active.status = Set(ComplaintStatus::Resolved);
    active.update(db).await.map_err(Into::into)
}

/// Retrieves all complaints, most recent first.
pub async fn get_all_complaints(db: &DatabaseConnection) -> Result<Vec<complaint::Model>> {
    Complaint::find()
        .order_by_desc(complaint::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
