//! FAQ entity model and DTOs.
//!
//! API payloads are camelCase; the database column `sort_order` is exposed
//! to clients as `order`.

use bakehouse_core::faq::DisplayKey;
use bakehouse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub is_published: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Faq {
    /// Key this row sorts by in every listing.
    pub fn display_key(&self) -> DisplayKey {
        DisplayKey {
            order: self.sort_order,
            created_at: self.created_at,
            id: self.id,
        }
    }
}

/// DTO for creating a new FAQ. The position is assigned by the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaq {
    #[validate(length(min = 5, max = 255, message = "Question must be between 5 and 255 characters"))]
    pub question: String,
    #[validate(length(min = 10, message = "Answer must be at least 10 characters"))]
    pub answer: String,
    pub is_published: Option<bool>,
}

/// DTO for a partial FAQ update. Omitted fields are left unchanged; the
/// position can only change through a reorder.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaq {
    #[validate(length(min = 5, max = 255, message = "Question must be between 5 and 255 characters"))]
    pub question: Option<String>,
    #[validate(length(min = 10, message = "Answer must be at least 10 characters"))]
    pub answer: Option<String>,
    pub is_published: Option<bool>,
}

/// Result of applying a reorder batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Every named row was updated; carries the number of rows touched.
    Applied(u64),
    /// Some ids do not exist. Nothing was written.
    MissingIds(Vec<DbId>),
}
