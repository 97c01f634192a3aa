//! Repository for the `cities` table.

use sqlx::PgPool;
use tourdesk_core::types::DbId;

use crate::models::city::{City, CreateCity, UpdateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, country, image_url, created_at, updated_at";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (slug, name, country, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cities alphabetically by name.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY name, id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, City>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all cities.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cities")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Update a city. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                country = COALESCE($4, country),
                image_url = COALESCE($5, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city. Its tours keep existing with `city_id` cleared.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
