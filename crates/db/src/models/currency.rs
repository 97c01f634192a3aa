//! Display currency model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};

/// A row from the `currencies` table.
///
/// `exchange_rate` is units of this currency per one unit of the base
/// currency; `commission_bps` is added on top of converted prices.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Currency {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub exchange_rate: f64,
    pub commission_bps: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a currency, keyed by code in the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCurrency {
    pub name: String,
    pub exchange_rate: f64,
    /// Defaults to 0 on insert; left unchanged on update if omitted.
    pub commission_bps: Option<i32>,
}

/// DTO for changing only the commission rate.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommission {
    pub commission_bps: i32,
}
