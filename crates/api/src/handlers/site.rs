//! Handlers for the public, language-prefixed site API.
//!
//! Every route lives under `/site/{lang}`; the [`Locale`] extractor picks the
//! language up from that segment, so handlers only extract the ids they need.
//! Inactive tours and tours without a translation in the active language are
//! invisible here.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use tourdesk_core::currency::{quote_price, validate_currency_code, BASE_CURRENCY};
use tourdesk_core::error::CoreError;
use tourdesk_core::language::Language;
use tourdesk_core::review::{
    average_rating, validate_author_name, validate_comment, validate_rating,
};
use tourdesk_core::types::DbId;
use tourdesk_db::models::review::CreateReview;
use tourdesk_db::models::tour::{Tour, TourFilter, TourTranslation};
use tourdesk_db::repositories::{CityRepo, CurrencyRepo, FaqRepo, ReviewRepo, TourRepo};

use crate::error::{AppError, AppResult};
use crate::locale::Locale;
use crate::query::{PageParams, TourListParams};
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct TourDetailParams {
    /// ISO 4217 code to quote the price in. Defaults to the base currency.
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PriceQuote {
    pub currency: String,
    pub amount_cents: i64,
    pub base_currency: &'static str,
    pub base_amount_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct RatingView {
    pub average: Option<f64>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct TourDetail {
    pub tour: Tour,
    pub translation: TourTranslation,
    pub language: Language,
    pub is_rtl: bool,
    /// Languages this tour can also be read in.
    pub available_languages: Vec<String>,
    pub rating: RatingView,
    pub price: PriceQuote,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a tour that is visible on the public site.
async fn ensure_public_tour(pool: &sqlx::PgPool, id: DbId) -> AppResult<Tour> {
    TourRepo::find_by_id(pool, id)
        .await?
        .filter(|t| t.is_active)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour", id }))
}

async fn quote(pool: &sqlx::PgPool, tour: &Tour, currency: Option<String>) -> AppResult<PriceQuote> {
    let code = currency.unwrap_or_else(|| BASE_CURRENCY.to_string());
    validate_currency_code(&code)?;

    let amount_cents = if code == BASE_CURRENCY {
        tour.price_cents
    } else {
        let rate = CurrencyRepo::find_by_code(pool, &code).await?.ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Currency '{code}' is not available"
            )))
        })?;
        quote_price(tour.price_cents, rate.exchange_rate, rate.commission_bps)
    };

    Ok(PriceQuote {
        currency: code,
        amount_cents,
        base_currency: BASE_CURRENCY,
        base_amount_cents: tour.price_cents,
    })
}

// ---------------------------------------------------------------------------
// GET /site/{lang}/cities
// ---------------------------------------------------------------------------

/// List cities, one page at a time.
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

// ---------------------------------------------------------------------------
// GET /site/{lang}/tours
// ---------------------------------------------------------------------------

/// List active tours translated into the active language.
pub async fn list_tours(
    State(state): State<AppState>,
    Query(params): Query<TourListParams>,
    Locale(language): Locale,
) -> AppResult<impl IntoResponse> {
    let filter = TourFilter {
        city_id: params.city_id,
        active_only: true,
        translated_only: true,
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

    tracing::debug!(
        count = items.len(),
        total,
        %language,
        page = request.page,
        "Listed public tours"
    );

    Ok(Json(PaginatedResponse::new(items, request.with_total(total))))
}

// ---------------------------------------------------------------------------
// GET /site/{lang}/tours/{id}
// ---------------------------------------------------------------------------

/// Tour detail page: content in the active language, rating and price quote.
pub async fn get_tour(
    State(state): State<AppState>,
    Path((_, id)): Path<(String, DbId)>,
    Query(params): Query<TourDetailParams>,
    Locale(language): Locale,
) -> AppResult<impl IntoResponse> {
    let tour = ensure_public_tour(&state.pool, id).await?;

    let translation = TourRepo::find_translation(&state.pool, id, language.as_code())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tour", id }))?;
    let available_languages = TourRepo::list_languages(&state.pool, id).await?;
    let summary = ReviewRepo::rating_summary(&state.pool, id).await?;
    let price = quote(&state.pool, &tour, params.currency).await?;

    Ok(Json(DataResponse {
        data: TourDetail {
            tour,
            translation,
            language,
            is_rtl: language.is_rtl(),
            available_languages,
            rating: RatingView {
                average: average_rating(summary.rating_sum, summary.review_count),
                count: summary.review_count,
            },
            price,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /site/{lang}/tours/{id}/reviews
// ---------------------------------------------------------------------------

/// List approved reviews for a tour.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path((_, id)): Path<(String, DbId)>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    ensure_public_tour(&state.pool, id).await?;
    let total = ReviewRepo::count_for_tour(&state.pool, id, true).await?;
    let request = state
        .page_request(params.page, params.per_page)
        .clamp_to_total(total);

    let items =
        ReviewRepo::list_for_tour(&state.pool, id, true, request.limit(), request.offset())
            .await?;

    Ok(Json(PaginatedResponse::new(items, request.with_total(total))))
}

// ---------------------------------------------------------------------------
// POST /site/{lang}/tours/{id}/reviews
// ---------------------------------------------------------------------------

/// Submit a review. It stays hidden until approved in the back office.
pub async fn create_review(
    State(state): State<AppState>,
    Path((_, id)): Path<(String, DbId)>,
    Locale(language): Locale,
    Json(body): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    validate_rating(body.rating)?;
    validate_author_name(&body.author_name)?;
    if let Some(comment) = &body.comment {
        validate_comment(comment)?;
    }

    ensure_public_tour(&state.pool, id).await?;
    let review = ReviewRepo::create(&state.pool, id, language.as_code(), &body).await?;

    tracing::info!(
        review_id = review.id,
        tour_id = id,
        rating = review.rating,
        %language,
        "Review submitted for moderation"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

// ---------------------------------------------------------------------------
// GET /site/{lang}/tours/{id}/faqs
// ---------------------------------------------------------------------------

/// FAQ entries for a tour in the active language, site-wide entries included.
pub async fn list_faqs(
    State(state): State<AppState>,
    Path((_, id)): Path<(String, DbId)>,
    Locale(language): Locale,
) -> AppResult<impl IntoResponse> {
    ensure_public_tour(&state.pool, id).await?;
    let items = FaqRepo::list_for_tour(&state.pool, id, language.as_code()).await?;
    Ok(Json(DataResponse { data: items }))
}
