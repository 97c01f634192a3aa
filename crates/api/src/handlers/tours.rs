//! Back-office handlers for tours and their per-language content.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use tourdesk_core::error::CoreError;
use tourdesk_core::language::Language;
use tourdesk_core::tour_form::{validate_tour_form, ValidationReport};
use tourdesk_core::types::DbId;
use tourdesk_core::wizard::FormRecord;
use tourdesk_db::models::tour::{Tour, TourFilter, TourTranslation, UpdateTourActive};
use tourdesk_db::repositories::TourRepo;

use crate::error::{AppError, AppResult};
use crate::locale::Locale;
use crate::query::TourListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for `PUT /admin/tours/{id}/translations/{lang}`.
#[derive(Debug, Deserialize)]
pub struct UpdateTranslationRequest {
    pub form: FormRecord,
    /// Save even when required fields are empty.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct SavedTranslation {
    pub translation: TourTranslation,
    pub validation: ValidationReport,
}

#[derive(Debug, Serialize)]
pub struct AdminTourDetail {
    pub tour: Tour,
    pub language: Language,
    /// Content in the requested language, if it has been written.
    pub translation: Option<TourTranslation>,
    pub translated_languages: Vec<String>,
    /// Supported languages with no content yet.
    pub missing_languages: Vec<Language>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn tour_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Tour", id })
}

async fn ensure_tour_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Tour> {
    TourRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| tour_not_found(id))
}

// ---------------------------------------------------------------------------
// GET /admin/tours
// ---------------------------------------------------------------------------

/// List every tour, active or not, with titles in the requested language
/// where available.
pub async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<TourListParams>,
    Locale(language): Locale,
) -> AppResult<impl IntoResponse> {
    let filter = TourFilter {
        city_id: params.city_id,
        ..TourFilter::default()
    };
    let total = TourRepo::count(&state.pool, language.as_code(), &filter).await?;
    let request = state
        .page_request(params.page, params.per_page)
        .clamp_to_total(total);

    let items = TourRepo::list_page(
        &state.pool,
        language.as_code(),
        &filter,
        request.limit(),
        request.offset(),
    )
    .await?;

    Ok(Json(PaginatedResponse::new(items, request.with_total(total))))
}

// ---------------------------------------------------------------------------
// GET /admin/tours/{id}
// ---------------------------------------------------------------------------

pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Locale(language): Locale,
) -> AppResult<impl IntoResponse> {
    let tour = ensure_tour_exists(&state.pool, id).await?;
    let translation = TourRepo::find_translation(&state.pool, id, language.as_code()).await?;
    let translated_languages = TourRepo::list_languages(&state.pool, id).await?;
    let missing_languages = Language::ALL
        .into_iter()
        .filter(|l| !translated_languages.iter().any(|t| t == l.as_code()))
        .collect();

    Ok(Json(DataResponse {
        data: AdminTourDetail {
            tour,
            language,
            translation,
            translated_languages,
            missing_languages,
        },
    }))
}

// ---------------------------------------------------------------------------
// PUT /admin/tours/{id}/translations/{lang}
// ---------------------------------------------------------------------------

/// Create or replace a tour's content in one language.
///
/// Empty required fields are rejected with 422 unless `force` is set.
pub async fn update_translation(
    State(state): State<AppState>,
    Path((id, lang)): Path<(DbId, String)>,
    Json(body): Json<UpdateTranslationRequest>,
) -> AppResult<impl IntoResponse> {
    let language = Language::from_code(&lang)?;
    let validation = validate_tour_form(language, &body.form, body.force)?;

    ensure_tour_exists(&state.pool, id).await?;
    let translation =
        TourRepo::upsert_translation(&state.pool, id, language.as_code(), &body.form).await?;

    if validation.overridden {
        tracing::warn!(
            tour_id = id,
            %language,
            missing = ?validation.missing,
            "Tour translation saved with missing required fields"
        );
    } else {
        tracing::info!(tour_id = id, %language, "Tour translation saved");
    }

    Ok(Json(DataResponse {
        data: SavedTranslation {
            translation,
            validation,
        },
    }))
}

// ---------------------------------------------------------------------------
// PUT /admin/tours/{id}/active
// ---------------------------------------------------------------------------

/// Publish or hide a tour on the public site.
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateTourActive>,
) -> AppResult<impl IntoResponse> {
    let tour = TourRepo::set_active(&state.pool, id, body.is_active)
        .await?
        .ok_or_else(|| tour_not_found(id))?;

    tracing::info!(tour_id = id, is_active = body.is_active, "Tour visibility changed");

    Ok(Json(DataResponse { data: tour }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/tours/{id}
// ---------------------------------------------------------------------------

/// Delete a tour with its translations, reviews and FAQs.
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TourRepo::delete(&state.pool, id).await? {
        return Err(tour_not_found(id));
    }
    tracing::info!(tour_id = id, "Tour deleted");
    Ok(StatusCode::NO_CONTENT)
}
