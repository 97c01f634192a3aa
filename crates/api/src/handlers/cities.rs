//! Back-office handlers for cities.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tourdesk_core::catalog::{validate_name, validate_slug};
use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_db::models::city::{CreateCity, UpdateCity};
use tourdesk_db::repositories::CityRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

fn city_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "City", id })
}

/// GET /admin/cities
pub async fn list_cities(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let total = CityRepo::count(&state.pool).await?;
    let request = state
        .page_request(params.page, params.per_page)
        .clamp_to_total(total);
    let items = CityRepo::list(&state.pool, request.limit(), request.offset()).await?;
    Ok(Json(PaginatedResponse::new(items, request.with_total(total))))
}

/// POST /admin/cities
pub async fn create_city(
    State(state): State<AppState>,
    Json(body): Json<CreateCity>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&body.slug)?;
    validate_name("City name", &body.name)?;
    validate_name("Country", &body.country)?;

    let city = CityRepo::create(&state.pool, &body).await?;
    tracing::info!(city_id = city.id, slug = %city.slug, "City created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: city })))
}

/// GET /admin/cities/{id}
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let city = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| city_not_found(id))?;
    Ok(Json(DataResponse { data: city }))
}

/// PUT /admin/cities/{id}
///
/// Absent fields keep their stored values.
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateCity>,
) -> AppResult<impl IntoResponse> {
    if let Some(slug) = &body.slug {
        validate_slug(slug)?;
    }
    if let Some(name) = &body.name {
        validate_name("City name", name)?;
    }
    if let Some(country) = &body.country {
        validate_name("Country", country)?;
    }

    let city = CityRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| city_not_found(id))?;
    tracing::info!(city_id = id, "City updated");

    Ok(Json(DataResponse { data: city }))
}

/// DELETE /admin/cities/{id}
///
/// Tours in the city are kept and lose their city link.
pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CityRepo::delete(&state.pool, id).await? {
        return Err(city_not_found(id));
    }
    tracing::info!(city_id = id, "City deleted");
    Ok(StatusCode::NO_CONTENT)
}
