//! City entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};

/// A city row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub country: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new city.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub slug: String,
    pub name: String,
    pub country: String,
    pub image_url: Option<String>,
}

/// DTO for updating an existing city. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCity {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
}
