//! FAQ entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};

/// A row from the `faqs` table. `tour_id` is `None` for site-wide entries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub tour_id: Option<DbId>,
    pub language: String,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a FAQ entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaq {
    pub tour_id: Option<DbId>,
    pub language: String,
    pub question: String,
    pub answer: String,
    pub sort_order: Option<i32>,
}
