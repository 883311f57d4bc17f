//! FAQ service: validation and ordering on top of [`FaqRepo`].
//!
//! Validation happens here, before any query runs. Position assignment on
//! create and bulk reorder are delegated to the repository, which applies
//! them under the ordering lock.

use bakehouse_core::error::CoreError;
use bakehouse_core::faq::{validate_reorder, ReorderItem};
use bakehouse_core::types::DbId;
use bakehouse_db::models::faq::{CreateFaq, Faq, ReorderOutcome, UpdateFaq};
use bakehouse_db::repositories::FaqRepo;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Entity name used in not-found errors.
const ENTITY: &str = "FAQ";

pub struct FaqService;

impl FaqService {
    /// Published FAQs in display order, for public readers.
    pub async fn list_published(pool: &PgPool) -> AppResult<Vec<Faq>> {
        Ok(FaqRepo::list_published(pool).await?)
    }

    /// Every FAQ in display order, for the admin dashboard.
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Faq>> {
        Ok(FaqRepo::list(pool).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Faq> {
        FaqRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        Ok(FaqRepo::count(pool).await?)
    }

    /// Validate and insert a new FAQ at the end of the display order.
    ///
    /// Fails with a conflict when the largest existing order leaves no
    /// later position.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> AppResult<Faq> {
        input.validate()?;

        let Some(faq) = FaqRepo::create(pool, input).await? else {
            tracing::warn!("FAQ create rejected: order positions exhausted");
            return Err(CoreError::Conflict(
                "No order position is left after the current last FAQ; reorder first".into(),
            )
            .into());
        };
        tracing::info!(
            faq_id = %faq.id,
            order = faq.sort_order,
            is_published = faq.is_published,
            "FAQ created"
        );
        Ok(faq)
    }

    /// Apply a partial update. Only supplied fields are validated and written.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateFaq) -> AppResult<Faq> {
        input.validate()?;

        let faq = FaqRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(faq_id = %faq.id, "FAQ updated");
        Ok(faq)
    }

    /// Delete an FAQ. Remaining positions are not compacted.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if !FaqRepo::delete(pool, id).await? {
            return Err(not_found(id));
        }
        tracing::info!(faq_id = %id, "FAQ deleted");
        Ok(())
    }

    /// Assign the given positions atomically. Returns the number of rows
    /// updated.
    ///
    /// Fails with a validation error for negative orders or repeated ids,
    /// and with not-found (writing nothing) if any id does not exist.
    pub async fn reorder(pool: &PgPool, items: &[ReorderItem]) -> AppResult<u64> {
        validate_reorder(items).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

        match FaqRepo::reorder(pool, items).await? {
            ReorderOutcome::Applied(updated) => {
                tracing::info!(updated, "FAQs reordered");
                Ok(updated)
            }
            ReorderOutcome::MissingIds(missing) => {
                tracing::warn!(missing = ?missing, "Reorder rejected: unknown FAQ ids");
                // The repository only reports this outcome with at least one id.
                Err(not_found(missing[0]))
            }
        }
    }
}

fn not_found(id: DbId) -> AppError {
    CoreError::not_found(ENTITY, id).into()
}
