//! Tour entity, per-language translation, and listing projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::wizard::FormRecord;

/// A row from the `tours` table. Text content lives in [`TourTranslation`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tour {
    pub id: DbId,
    pub city_id: Option<DbId>,
    pub price_cents: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `tour_translations` table: one language's content.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourTranslation {
    pub id: DbId,
    pub tour_id: DbId,
    pub language: String,
    pub title: String,
    pub category: String,
    pub availability: String,
    pub duration: String,
    pub description: String,
    pub highlights: String,
    pub included: String,
    pub not_included: String,
    pub take_with: String,
    pub program: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TourTranslation {
    /// The translation's content as an editable form record.
    pub fn to_form_record(&self) -> FormRecord {
        FormRecord {
            title: self.title.clone(),
            category: self.category.clone(),
            availability: self.availability.clone(),
            duration: self.duration.clone(),
            description: self.description.clone(),
            highlights: self.highlights.clone(),
            included: self.included.clone(),
            not_included: self.not_included.clone(),
            take_with: self.take_with.clone(),
            program: self.program.clone(),
        }
    }
}

/// Listing row: a tour joined with its city and one language's headline
/// fields. Text columns are `None` when the tour has no translation in the
/// requested language.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourSummary {
    pub id: DbId,
    pub city_id: Option<DbId>,
    pub city_name: Option<String>,
    pub price_cents: i64,
    pub is_active: bool,
    pub title: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub average_rating: Option<f64>,
    pub review_count: i64,
    pub created_at: Timestamp,
}

/// Non-text attributes supplied when a tour is created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTour {
    pub city_id: Option<DbId>,
    /// Defaults to 0 if omitted.
    pub price_cents: Option<i64>,
}

/// Filters shared by the tour listing and its count.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourFilter {
    pub city_id: Option<DbId>,
    /// Hide tours switched off in the back office.
    pub active_only: bool,
    /// Hide tours with no translation in the listing language.
    pub translated_only: bool,
}

/// DTO for toggling a tour's visibility on the public site.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTourActive {
    pub is_active: bool,
}
