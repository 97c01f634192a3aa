//! Back-office currency rates and commissions.
//!
//! Rates are relative to the base currency; quotes on the public site apply
//! the rate and then the commission.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use tourdesk_core::catalog::validate_name;
use tourdesk_core::currency::{
    validate_commission_bps, validate_currency_code, validate_exchange_rate,
};
use tourdesk_db::models::currency::{UpdateCommission, UpsertCurrency};
use tourdesk_db::repositories::CurrencyRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/currencies
pub async fn list_currencies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CurrencyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /admin/currencies/{code}
///
/// Creates the currency or replaces its name and rate. A missing
/// `commission_bps` keeps the stored commission (zero for new rows).
pub async fn upsert_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<UpsertCurrency>,
) -> AppResult<impl IntoResponse> {
    validate_currency_code(&code)?;
    validate_name("Currency name", &body.name)?;
    validate_exchange_rate(body.exchange_rate)?;
    if let Some(bps) = body.commission_bps {
        validate_commission_bps(bps)?;
    }

    let currency = CurrencyRepo::upsert(&state.pool, &code, &body).await?;

    tracing::info!(
        code = %currency.code,
        exchange_rate = currency.exchange_rate,
        commission_bps = currency.commission_bps,
        "Currency saved"
    );

    Ok(Json(DataResponse { data: currency }))
}

/// PUT /admin/currencies/{code}/commission
pub async fn update_commission(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<UpdateCommission>,
) -> AppResult<impl IntoResponse> {
    validate_currency_code(&code)?;
    validate_commission_bps(body.commission_bps)?;

    let currency = CurrencyRepo::update_commission(&state.pool, &code, body.commission_bps)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;

    tracing::info!(
        code = %currency.code,
        commission_bps = currency.commission_bps,
        "Currency commission updated"
    );

    Ok(Json(DataResponse { data: currency }))
}
