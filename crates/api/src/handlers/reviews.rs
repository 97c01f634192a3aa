//! Back-office review moderation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_db::models::review::UpdateReviewApproval;
use tourdesk_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

fn review_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Review",
        id,
    })
}

/// GET /admin/reviews/pending -- oldest first.
pub async fn list_pending(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let total = ReviewRepo::count_pending(&state.pool).await?;
    let request = state
        .page_request(params.page, params.per_page)
        .clamp_to_total(total);
    let items = ReviewRepo::list_pending(&state.pool, request.limit(), request.offset()).await?;
    Ok(Json(PaginatedResponse::new(items, request.with_total(total))))
}

/// PUT /admin/reviews/{id}/approval
pub async fn set_approval(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateReviewApproval>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::set_approved(&state.pool, id, body.is_approved)
        .await?
        .ok_or_else(|| review_not_found(id))?;

    tracing::info!(
        review_id = id,
        tour_id = review.tour_id,
        is_approved = body.is_approved,
        "Review moderated"
    );

    Ok(Json(DataResponse { data: review }))
}

/// DELETE /admin/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ReviewRepo::delete(&state.pool, id).await? {
        return Err(review_not_found(id));
    }
    tracing::info!(review_id = id, "Review deleted");
    Ok(StatusCode::NO_CONTENT)
}
