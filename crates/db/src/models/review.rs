//! Customer review model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub tour_id: DbId,
    pub author_name: String,
    pub rating: i16,
    pub comment: String,
    pub language: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a customer submitting a review. New reviews await approval.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub author_name: String,
    pub rating: i16,
    pub comment: Option<String>,
}

/// DTO for the moderation toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReviewApproval {
    pub is_approved: bool,
}

/// Aggregate over a tour's approved reviews.
#[derive(Debug, Clone, FromRow)]
pub struct RatingSummary {
    pub review_count: i64,
    pub rating_sum: i64,
}
