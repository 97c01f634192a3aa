//! Repository for the `currencies` table.

use sqlx::PgPool;

use crate::models::currency::{Currency, UpsertCurrency};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, exchange_rate, commission_bps, created_at, updated_at";

/// Provides read and upsert operations for display currencies.
pub struct CurrencyRepo;

impl CurrencyRepo {
    /// List all currencies ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Currency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM currencies ORDER BY code");
        sqlx::query_as::<_, Currency>(&query).fetch_all(pool).await
    }

    /// Find a currency by its three-letter code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Currency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM currencies WHERE code = $1");
        sqlx::query_as::<_, Currency>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Insert a currency or replace its name and rate.
    ///
    /// A `None` commission defaults to 0 on insert and is left untouched on
    /// update.
    pub async fn upsert(
        pool: &PgPool,
        code: &str,
        input: &UpsertCurrency,
    ) -> Result<Currency, sqlx::Error> {
        let query = format!(
            "INSERT INTO currencies (code, name, exchange_rate, commission_bps)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             ON CONFLICT ON CONSTRAINT uq_currencies_code DO UPDATE SET
                name = EXCLUDED.name,
                exchange_rate = EXCLUDED.exchange_rate,
                commission_bps = COALESCE($4, currencies.commission_bps)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Currency>(&query)
            .bind(code)
            .bind(&input.name)
            .bind(input.exchange_rate)
            .bind(input.commission_bps)
            .fetch_one(pool)
            .await
    }

    /// Change a currency's commission. Returns `None` if the code is unknown.
    pub async fn update_commission(
        pool: &PgPool,
        code: &str,
        commission_bps: i32,
    ) -> Result<Option<Currency>, sqlx::Error> {
        let query = format!(
            "UPDATE currencies SET commission_bps = $2
             WHERE code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Currency>(&query)
            .bind(code)
            .bind(commission_bps)
            .fetch_optional(pool)
            .await
    }
}
