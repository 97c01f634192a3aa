//! Repository for the `faqs` table.

use sqlx::PgPool;
use tourdesk_core::types::DbId;

use crate::models::faq::{CreateFaq, Faq};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, tour_id, language, question, answer, sort_order, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ entry.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (tour_id, language, question, answer, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(input.tour_id)
            .bind(&input.language)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// FAQ entries for a tour in one language, followed by the site-wide
    /// entries for that language.
    pub async fn list_for_tour(
        pool: &PgPool,
        tour_id: DbId,
        language: &str,
    ) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs
             WHERE language = $2 AND (tour_id = $1 OR tour_id IS NULL)
             ORDER BY tour_id NULLS LAST, sort_order, id"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(tour_id)
            .bind(language)
            .fetch_all(pool)
            .await
    }

    /// Delete a FAQ entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
