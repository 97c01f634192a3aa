//! Repository for the `tour_wizard_sessions` table.

use sqlx::types::Json;
use sqlx::PgPool;
use tourdesk_core::types::DbId;
use tourdesk_core::wizard::{FormField, FormRecord, WizardStatus};

use crate::models::tour::{NewTour, Tour, TourTranslation};
use crate::models::wizard_session::TourWizardSession;
use crate::repositories::TourRepo;

/// Column list for `tour_wizard_sessions` queries.
const COLUMNS: &str =
    "id, language, current_step, form_data, status, tour_id, created_at, updated_at";

/// Provides persistence for tour wizard sessions.
pub struct WizardSessionRepo;

impl WizardSessionRepo {
    /// Open a new session on step 1 with an empty form.
    pub async fn create(pool: &PgPool, language: &str) -> Result<TourWizardSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO tour_wizard_sessions (language, form_data)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourWizardSession>(&query)
            .bind(language)
            .bind(Json(FormRecord::default()))
            .fetch_one(pool)
            .await
    }

    /// Find a session by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TourWizardSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tour_wizard_sessions WHERE id = $1");
        sqlx::query_as::<_, TourWizardSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update the current step of a session.
    pub async fn update_step(
        pool: &PgPool,
        id: DbId,
        step: i32,
    ) -> Result<Option<TourWizardSession>, sqlx::Error> {
        let query = format!(
            "UPDATE tour_wizard_sessions SET current_step = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourWizardSession>(&query)
            .bind(id)
            .bind(step)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a single form field in place, leaving the other keys alone.
    ///
    /// Only in-progress sessions are touched; returns `None` otherwise.
    pub async fn set_form_field(
        pool: &PgPool,
        id: DbId,
        field: FormField,
        value: &str,
    ) -> Result<Option<TourWizardSession>, sqlx::Error> {
        let query = format!(
            "UPDATE tour_wizard_sessions
             SET form_data = jsonb_set(form_data, ARRAY[$2::text], to_jsonb($3::text), true)
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourWizardSession>(&query)
            .bind(id)
            .bind(field.name())
            .bind(value)
            .bind(WizardStatus::InProgress.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Update the status of a session.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<TourWizardSession>, sqlx::Error> {
        let query = format!(
            "UPDATE tour_wizard_sessions SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourWizardSession>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Create the tour from a completed form and close the session, in one
    /// transaction.
    ///
    /// Returns `None` (and creates nothing) if the session is no longer in
    /// progress, e.g. because a concurrent request completed it first.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        new_tour: &NewTour,
        language: &str,
        form: &FormRecord,
    ) -> Result<Option<(TourWizardSession, Tour, TourTranslation)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (tour, translation) =
            TourRepo::create_from_form(&mut tx, new_tour, language, form).await?;

        let query = format!(
            "UPDATE tour_wizard_sessions SET status = $2, tour_id = $3
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        let session = sqlx::query_as::<_, TourWizardSession>(&query)
            .bind(id)
            .bind(WizardStatus::Completed.as_str())
            .bind(tour.id)
            .bind(WizardStatus::InProgress.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        match session {
            Some(session) => {
                tx.commit().await?;
                Ok(Some((session, tour, translation)))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }
}
