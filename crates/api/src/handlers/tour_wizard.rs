//! Handlers for the five-step tour creation wizard.
//!
//! A session row stores the current step and the shared form record. Step
//! transitions load the row, rebuild a [`TourWizard`], apply one pure
//! transition and write the result back. Field edits overwrite a single
//! key of the stored form, so concurrent edits to different fields both land.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use tourdesk_core::error::CoreError;
use tourdesk_core::language::Language;
use tourdesk_core::tour_form::{validate_tour_form, ValidationReport};
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::wizard::{
    self, FormField, FormRecord, StepIndicator, TourWizard, WizardStatus,
};
use tourdesk_db::models::tour::{NewTour, Tour, TourTranslation};
use tourdesk_db::models::wizard_session::{
    CreateWizardSession, SetWizardField, TourWizardSession,
};
use tourdesk_db::repositories::WizardSessionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Optional tour attributes supplied when finishing the wizard.
#[derive(Debug, Default, Deserialize)]
pub struct CompleteWizardRequest {
    pub city_id: Option<DbId>,
    pub price_cents: Option<i64>,
}

/// A session together with everything the wizard screen renders.
#[derive(Debug, Serialize)]
pub struct WizardSessionView {
    pub id: DbId,
    pub language: String,
    pub status: String,
    pub current_step: u8,
    pub step_label: &'static str,
    pub is_final_step: bool,
    pub steps: Vec<StepIndicator>,
    /// Fields owned by the current step, with their values.
    pub current_fields: Vec<WizardFieldValue>,
    pub form: FormRecord,
    pub tour_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct WizardFieldValue {
    pub field: &'static str,
    pub value: String,
}

/// Result of finishing the wizard.
#[derive(Debug, Serialize)]
pub struct CompletedWizard {
    pub session: WizardSessionView,
    pub tour: Tour,
    pub translation: TourTranslation,
    /// Required fields that were empty; completion proceeds regardless.
    pub validation: ValidationReport,
}

impl WizardSessionView {
    fn build(session: TourWizardSession) -> AppResult<Self> {
        let wizard = session.wizard()?;
        let step = wizard.step();
        let current_fields = wizard
            .step_payload(step)
            .into_iter()
            .map(|(field, value)| WizardFieldValue {
                field: field.name(),
                value: value.to_string(),
            })
            .collect();

        Ok(Self {
            id: session.id,
            status: session.status,
            current_step: wizard.current_step(),
            step_label: step.label(),
            is_final_step: wizard.is_final_step(),
            steps: wizard.steps(),
            current_fields,
            form: session.form_data.0,
            language: session.language,
            tour_id: session.tour_id,
            created_at: session.created_at,
            updated_at: session.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn session_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TourWizardSession",
        id,
    })
}

/// Verify that a wizard session exists, returning the full row.
async fn ensure_session_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<TourWizardSession> {
    WizardSessionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| session_not_found(id))
}

/// Load a session that must still be in progress.
async fn load_in_progress(
    pool: &sqlx::PgPool,
    id: DbId,
    action: &str,
) -> AppResult<TourWizardSession> {
    let session = ensure_session_exists(pool, id).await?;
    wizard::ensure_in_progress(&session.status, action)?;
    Ok(session)
}

/// Persist a new step for the session and render it.
async fn move_to_step(
    state: &AppState,
    session: TourWizardSession,
    next: TourWizard,
    direction: &'static str,
) -> AppResult<Json<DataResponse<WizardSessionView>>> {
    let id = session.id;
    let from_step = session.current_step;
    let to_step = next.current_step();

    // Boundary transitions are no-ops; skip the write.
    if i32::from(to_step) == from_step {
        tracing::debug!(session_id = id, step = from_step, direction, "Tour wizard at boundary");
        return Ok(Json(DataResponse {
            data: WizardSessionView::build(session)?,
        }));
    }

    let updated = WizardSessionRepo::update_step(&state.pool, id, i32::from(to_step))
        .await?
        .ok_or_else(|| session_not_found(id))?;

    tracing::info!(
        session_id = id,
        from_step,
        to_step,
        direction,
        "Tour wizard moved"
    );

    Ok(Json(DataResponse {
        data: WizardSessionView::build(updated)?,
    }))
}

// ---------------------------------------------------------------------------
// POST /tour-wizard
// ---------------------------------------------------------------------------

/// Start a new wizard session on step 1 with an empty form.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateWizardSession>,
) -> AppResult<impl IntoResponse> {
    let language = match body.language.as_deref() {
        Some(code) => Language::from_code(code)?,
        None => state.config.default_language,
    };

    let session = WizardSessionRepo::create(&state.pool, language.as_code()).await?;

    tracing::info!(session_id = session.id, %language, "Tour wizard session created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: WizardSessionView::build(session)?,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /tour-wizard/{id}
// ---------------------------------------------------------------------------

/// Get a wizard session with its derived step indicators.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = ensure_session_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: WizardSessionView::build(session)?,
    }))
}

// ---------------------------------------------------------------------------
// PUT /tour-wizard/{id}/fields
// ---------------------------------------------------------------------------

/// Store one field value. Any field may be written from any step.
pub async fn set_field(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SetWizardField>,
) -> AppResult<impl IntoResponse> {
    let field = FormField::from_name(&body.field)?;

    let session = load_in_progress(&state.pool, id, "edit").await?;

    let updated = WizardSessionRepo::set_form_field(&state.pool, id, field, &body.value)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Tour wizard session {id} was closed while editing"
            )))
        })?;

    tracing::info!(
        session_id = id,
        field = field.name(),
        step = session.current_step,
        "Tour wizard field updated"
    );

    Ok(Json(DataResponse {
        data: WizardSessionView::build(updated)?,
    }))
}

// ---------------------------------------------------------------------------
// POST /tour-wizard/{id}/advance
// ---------------------------------------------------------------------------

/// Move forward one step. On the final step this returns the session unchanged.
pub async fn advance_step(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = load_in_progress(&state.pool, id, "advance").await?;
    let next = session.wizard()?.advance();
    move_to_step(&state, session, next, "forward").await
}

// ---------------------------------------------------------------------------
// POST /tour-wizard/{id}/go-back
// ---------------------------------------------------------------------------

/// Move back one step. On step 1 this returns the session unchanged.
pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = load_in_progress(&state.pool, id, "navigate").await?;
    let next = session.wizard()?.retreat();
    move_to_step(&state, session, next, "back").await
}

// ---------------------------------------------------------------------------
// POST /tour-wizard/{id}/complete
// ---------------------------------------------------------------------------

/// Create the tour from the accumulated form.
///
/// Only allowed on the final step. Missing required fields are reported in
/// the response but do not block creation.
pub async fn complete_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<CompleteWizardRequest>,
) -> AppResult<impl IntoResponse> {
    if body.price_cents.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest(
            "price_cents must not be negative".to_string(),
        ));
    }

    let session = load_in_progress(&state.pool, id, "complete").await?;
    let language = Language::from_code(&session.language)?;
    let form = session.wizard()?.complete()?;
    let validation = validate_tour_form(language, &form, true)?;

    let new_tour = NewTour {
        city_id: body.city_id,
        price_cents: body.price_cents,
    };

    let (completed, tour, translation) =
        WizardSessionRepo::complete(&state.pool, id, &new_tour, language.as_code(), &form)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Conflict(format!(
                    "Tour wizard session {id} was already finished"
                )))
            })?;

    if validation.overridden {
        tracing::warn!(
            session_id = id,
            tour_id = tour.id,
            missing = ?validation.missing,
            "Tour created with missing required fields"
        );
    }
    tracing::info!(session_id = id, tour_id = tour.id, %language, "Tour wizard completed");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CompletedWizard {
                session: WizardSessionView::build(completed)?,
                tour,
                translation,
                validation,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /tour-wizard/{id}/abandon
// ---------------------------------------------------------------------------

/// Mark a wizard session as abandoned, discarding its form.
pub async fn abandon_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_in_progress(&state.pool, id, "abandon").await?;

    let updated =
        WizardSessionRepo::update_status(&state.pool, id, WizardStatus::Abandoned.as_str())
            .await?
            .ok_or_else(|| session_not_found(id))?;

    tracing::info!(session_id = id, "Tour wizard abandoned");

    Ok(Json(DataResponse {
        data: WizardSessionView::build(updated)?,
    }))
}
