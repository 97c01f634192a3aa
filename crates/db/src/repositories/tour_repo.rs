//! Repository for the `tours` and `tour_translations` tables.

use sqlx::{PgConnection, PgPool};
use tourdesk_core::types::DbId;
use tourdesk_core::wizard::FormRecord;

use crate::models::tour::{NewTour, Tour, TourFilter, TourSummary, TourTranslation};

/// Column list for `tours` queries.
const COLUMNS: &str = "id, city_id, price_cents, is_active, created_at, updated_at";

/// Column list for `tour_translations` queries.
const TRANSLATION_COLUMNS: &str = "id, tour_id, language, title, category, availability, \
     duration, description, highlights, included, not_included, take_with, program, \
     created_at, updated_at";

/// Shared `WHERE` clause for listing and counting.
///
/// Binds: `$1` language, `$2` city id, `$3` active only, `$4` translated only.
const LIST_FILTER: &str = "WHERE ($2::BIGINT IS NULL OR t.city_id = $2) \
       AND ($3 = FALSE OR t.is_active) \
       AND ($4 = FALSE OR tr.id IS NOT NULL)";

/// Provides CRUD operations for tours and their translations.
pub struct TourRepo;

impl TourRepo {
    /// Create a tour and its first translation from a completed form.
    ///
    /// Runs on the caller's connection so it can join a wider transaction.
    pub async fn create_from_form(
        conn: &mut PgConnection,
        input: &NewTour,
        language: &str,
        form: &FormRecord,
    ) -> Result<(Tour, TourTranslation), sqlx::Error> {
        let query = format!(
            "INSERT INTO tours (city_id, price_cents)
             VALUES ($1, COALESCE($2, 0))
             RETURNING {COLUMNS}"
        );
        let tour = sqlx::query_as::<_, Tour>(&query)
            .bind(input.city_id)
            .bind(input.price_cents)
            .fetch_one(&mut *conn)
            .await?;

        let translation = Self::upsert_translation_inner(conn, tour.id, language, form).await?;
        Ok((tour, translation))
    }

    /// Find a tour by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE id = $1");
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one language's content for a tour.
    pub async fn find_translation(
        pool: &PgPool,
        tour_id: DbId,
        language: &str,
    ) -> Result<Option<TourTranslation>, sqlx::Error> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM tour_translations
             WHERE tour_id = $1 AND language = $2"
        );
        sqlx::query_as::<_, TourTranslation>(&query)
            .bind(tour_id)
            .bind(language)
            .fetch_optional(pool)
            .await
    }

    /// Languages a tour has content in, alphabetically.
    pub async fn list_languages(pool: &PgPool, tour_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT language FROM tour_translations WHERE tour_id = $1 ORDER BY language",
        )
        .bind(tour_id)
        .fetch_all(pool)
        .await
    }

    /// One page of tours with headline fields in `language`, newest first.
    pub async fn list_page(
        pool: &PgPool,
        language: &str,
        filter: &TourFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TourSummary>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.city_id, c.name AS city_name, t.price_cents, t.is_active,
                    tr.title, tr.category, tr.duration,
                    (SELECT ROUND(AVG(r.rating)::numeric, 1)::float8 FROM reviews r
                      WHERE r.tour_id = t.id AND r.is_approved) AS average_rating,
                    (SELECT COUNT(*) FROM reviews r
                      WHERE r.tour_id = t.id AND r.is_approved) AS review_count,
                    t.created_at
             FROM tours t
             LEFT JOIN cities c ON c.id = t.city_id
             LEFT JOIN tour_translations tr ON tr.tour_id = t.id AND tr.language = $1
             {LIST_FILTER}
             ORDER BY t.created_at DESC, t.id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, TourSummary>(&query)
            .bind(language)
            .bind(filter.city_id)
            .bind(filter.active_only)
            .bind(filter.translated_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count tours matching the same filter as [`Self::list_page`].
    pub async fn count(
        pool: &PgPool,
        language: &str,
        filter: &TourFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM tours t
             LEFT JOIN tour_translations tr ON tr.tour_id = t.id AND tr.language = $1
             {LIST_FILTER}"
        );
        let row: (i64,) = sqlx::query_as(&query)
            .bind(language)
            .bind(filter.city_id)
            .bind(filter.active_only)
            .bind(filter.translated_only)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert or replace one language's content for a tour.
    pub async fn upsert_translation(
        pool: &PgPool,
        tour_id: DbId,
        language: &str,
        form: &FormRecord,
    ) -> Result<TourTranslation, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::upsert_translation_inner(&mut conn, tour_id, language, form).await
    }

    async fn upsert_translation_inner(
        conn: &mut PgConnection,
        tour_id: DbId,
        language: &str,
        form: &FormRecord,
    ) -> Result<TourTranslation, sqlx::Error> {
        let query = format!(
            "INSERT INTO tour_translations
                (tour_id, language, title, category, availability, duration, description,
                 highlights, included, not_included, take_with, program)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             ON CONFLICT ON CONSTRAINT uq_tour_translations_tour_language DO UPDATE SET
                title = EXCLUDED.title,
                category = EXCLUDED.category,
                availability = EXCLUDED.availability,
                duration = EXCLUDED.duration,
                description = EXCLUDED.description,
                highlights = EXCLUDED.highlights,
                included = EXCLUDED.included,
                not_included = EXCLUDED.not_included,
                take_with = EXCLUDED.take_with,
                program = EXCLUDED.program
             RETURNING {TRANSLATION_COLUMNS}"
        );
        sqlx::query_as::<_, TourTranslation>(&query)
            .bind(tour_id)
            .bind(language)
            .bind(&form.title)
            .bind(&form.category)
            .bind(&form.availability)
            .bind(&form.duration)
            .bind(&form.description)
            .bind(&form.highlights)
            .bind(&form.included)
            .bind(&form.not_included)
            .bind(&form.take_with)
            .bind(&form.program)
            .fetch_one(conn)
            .await
    }

    /// Show or hide a tour on the public site. Returns `None` if it does
    /// not exist.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Tour>, sqlx::Error> {
        let query = format!(
            "UPDATE tours SET is_active = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tour with its translations, reviews and FAQs.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
