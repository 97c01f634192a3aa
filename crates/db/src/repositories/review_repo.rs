//! Repository for the `reviews` table.

use sqlx::PgPool;
use tourdesk_core::types::DbId;

use crate::models::review::{CreateReview, RatingSummary, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tour_id, author_name, rating, comment, language, is_approved, \
     created_at, updated_at";

/// Provides CRUD and moderation operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a customer review. New reviews start unapproved.
    pub async fn create(
        pool: &PgPool,
        tour_id: DbId,
        language: &str,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (tour_id, author_name, rating, comment, language)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(tour_id)
            .bind(input.author_name.trim())
            .bind(input.rating)
            .bind(&input.comment)
            .bind(language)
            .fetch_one(pool)
            .await
    }

    /// List a tour's reviews, newest first.
    pub async fn list_for_tour(
        pool: &PgPool,
        tour_id: DbId,
        approved_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE tour_id = $1 AND ($2 = FALSE OR is_approved)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(tour_id)
            .bind(approved_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count a tour's reviews with the same filter as [`Self::list_for_tour`].
    pub async fn count_for_tour(
        pool: &PgPool,
        tour_id: DbId,
        approved_only: bool,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM reviews WHERE tour_id = $1 AND ($2 = FALSE OR is_approved)",
        )
        .bind(tour_id)
        .bind(approved_only)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Reviews awaiting moderation across all tours, oldest first.
    pub async fn list_pending(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE NOT is_approved
             ORDER BY created_at, id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count reviews awaiting moderation.
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews WHERE NOT is_approved")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Approve or unapprove a review. Returns `None` if it does not exist.
    pub async fn set_approved(
        pool: &PgPool,
        id: DbId,
        is_approved: bool,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET is_approved = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(is_approved)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count and rating sum over a tour's approved reviews.
    pub async fn rating_summary(pool: &PgPool, tour_id: DbId) -> Result<RatingSummary, sqlx::Error> {
        sqlx::query_as::<_, RatingSummary>(
            "SELECT COUNT(*) AS review_count, COALESCE(SUM(rating), 0)::BIGINT AS rating_sum
             FROM reviews
             WHERE tour_id = $1 AND is_approved",
        )
        .bind(tour_id)
        .fetch_one(pool)
        .await
    }
}
