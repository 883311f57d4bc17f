//! Repository for the `faqs` table.
//!
//! Writers of `sort_order` (create and reorder) serialize on a
//! transaction-scoped advisory lock so two concurrent creates can never
//! read the same maximum, and a reorder batch is applied all-or-nothing.

use std::collections::HashSet;

use bakehouse_core::faq::{next_order, ReorderItem};
use bakehouse_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::faq::{CreateFaq, Faq, ReorderOutcome, UpdateFaq};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, is_published, sort_order, created_at, updated_at";

/// Display ordering with an explicit tie-break for equal `sort_order` values.
const DISPLAY_ORDER: &str = "ORDER BY sort_order, created_at, id";

/// Advisory lock key guarding `faqs.sort_order` assignment.
const ORDER_LOCK_KEY: i64 = 0x6661_7173_5f6f_7264; // "faqs_ord"

/// Provides CRUD and ordering operations for FAQs.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ at the end of the display order, returning the row.
    ///
    /// The new position is `max(sort_order) + 1`, or `1` for an empty table.
    /// Returns `None`, inserting nothing, when the current maximum is
    /// `i32::MAX` and no later position exists.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Option<Faq>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::lock_ordering(&mut tx).await?;

        let max_order: Option<i32> = sqlx::query_scalar("SELECT MAX(sort_order) FROM faqs")
            .fetch_one(&mut *tx)
            .await?;
        let Some(sort_order) = next_order(max_order) else {
            tx.rollback().await?;
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO faqs (question, answer, is_published, sort_order) \
             VALUES ($1, $2, COALESCE($3, false), $4) \
             RETURNING {COLUMNS}"
        );
        let faq = sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.is_published)
            .bind(sort_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(faq))
    }

    /// Find an FAQ by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every FAQ regardless of publish state, in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs {DISPLAY_ORDER}");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// List published FAQs only, in display order.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE is_published {DISPLAY_ORDER}");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Total number of FAQ rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
            .fetch_one(pool)
            .await
    }

    /// Update an FAQ. Only non-`None` fields are applied; `sort_order` is
    /// never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                question = COALESCE($2, question), \
                answer = COALESCE($3, answer), \
                is_published = COALESCE($4, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete an FAQ. Remaining positions are left as they are.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign `sort_order` for every item in one transaction.
    ///
    /// If any id does not exist, including one deleted by a transaction
    /// that commits while this update waits on its row lock, the
    /// transaction is rolled back and the missing ids are returned. Rows not
    /// named in `items` keep their current position.
    pub async fn reorder(
        pool: &PgPool,
        items: &[ReorderItem],
    ) -> Result<ReorderOutcome, sqlx::Error> {
        if items.is_empty() {
            return Ok(ReorderOutcome::Applied(0));
        }

        let ids: Vec<DbId> = items.iter().map(|item| item.id).collect();
        let orders: Vec<i32> = items.iter().map(|item| item.order).collect();

        let mut tx = pool.begin().await?;
        Self::lock_ordering(&mut tx).await?;

        // A row deleted before the update reaches it is not returned.
        let updated: HashSet<DbId> = sqlx::query_scalar::<_, DbId>(
            "UPDATE faqs AS f SET sort_order = p.sort_order \
             FROM UNNEST($1::UUID[], $2::INT4[]) AS p(id, sort_order) \
             WHERE f.id = p.id \
             RETURNING f.id",
        )
        .bind(&ids)
        .bind(&orders)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .collect();

        let missing: Vec<DbId> = ids
            .iter()
            .copied()
            .filter(|id| !updated.contains(id))
            .collect();
        if !missing.is_empty() {
            tx.rollback().await?;
            return Ok(ReorderOutcome::MissingIds(missing));
        }

        tx.commit().await?;
        Ok(ReorderOutcome::Applied(updated.len() as u64))
    }

    /// Take the ordering advisory lock for the rest of the transaction.
    async fn lock_ordering(tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(ORDER_LOCK_KEY)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
