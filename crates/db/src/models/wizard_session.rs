//! Tour wizard session entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use tourdesk_core::error::CoreError;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::wizard::{self, FormRecord, TourWizard};

/// A row from the `tour_wizard_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourWizardSession {
    pub id: DbId,
    pub language: String,
    pub current_step: i32,
    pub form_data: Json<FormRecord>,
    pub status: String,
    /// Set once the session completes and its tour is created.
    pub tour_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TourWizardSession {
    /// Rebuild the wizard state machine from this row.
    pub fn wizard(&self) -> Result<TourWizard, CoreError> {
        let step = wizard::step_from_db(self.current_step)?;
        TourWizard::resume(step, self.form_data.0.clone())
    }
}

/// DTO for opening a new wizard session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWizardSession {
    /// Content language for the tour being created. Defaults to the
    /// server's default language.
    pub language: Option<String>,
}

/// DTO for editing one field of the session's form.
#[derive(Debug, Clone, Deserialize)]
pub struct SetWizardField {
    pub field: String,
    pub value: String,
}
