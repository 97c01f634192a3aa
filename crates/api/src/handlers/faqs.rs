//! Back-office FAQ management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tourdesk_core::catalog::validate_faq;
use tourdesk_core::error::CoreError;
use tourdesk_core::language::Language;
use tourdesk_core::types::DbId;
use tourdesk_db::models::faq::CreateFaq;
use tourdesk_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /admin/faqs
///
/// Without a `tour_id` the entry is shown on every tour in its language.
pub async fn create_faq(
    State(state): State<AppState>,
    Json(mut body): Json<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    let language = Language::from_code(&body.language)?;
    validate_faq(&body.question, &body.answer)?;
    body.language = language.as_code().to_string();

    let faq = FaqRepo::create(&state.pool, &body).await?;
    tracing::info!(faq_id = faq.id, tour_id = ?faq.tour_id, %language, "FAQ created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// DELETE /admin/faqs/{id}
pub async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !FaqRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Faq", id }));
    }
    tracing::info!(faq_id = id, "FAQ deleted");
    Ok(StatusCode::NO_CONTENT)
}
