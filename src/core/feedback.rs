//! Feedback business logic - one-shot rating submissions.
//!
//! Each submission records a 1-5 rating, a free-text comment, a generated
//! follow-up token (same generation rule as checkout), and the fixed pair of
//! respondent role tags. Entries are immutable once created.

use crate::{
    core::token,
    entities::{Feedback, feedback},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// The fixed respondent role tags recorded on every submission
pub const RESPONDENTS: &str = "Admin,Canteener";

/// Submits a feedback entry for the given account.
///
/// # Errors
/// Returns `Error::InvalidRating` if the rating is outside 1..=5.
pub async fn submit_feedback(
    db: &DatabaseConnection,
    account_id: &str,
    rating: i32,
    comment: String,
) -> Result<feedback::Model> {
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }

    let model = feedback::ActiveModel {
        account_id: Set(account_id.to_string()),
        rating: Set(rating),
        comment: Set(comment),
        token: Set(token::random_token()),
        respondents: Set(RESPONDENTS.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves all feedback entries, most recent first.
pub async fn get_all_feedback(db: &DatabaseConnection) -> Result<Vec<feedback::Model>> {
    Feedback::find()
        .order_by_desc(feedback::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
