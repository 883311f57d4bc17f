//! FAQ ordering rules.
//!
//! Display order is ascending `order`, then `created_at`, then `id`. Values
//! are not unique and may have gaps: new entries are appended after the
//! current maximum, deletes never renumber, and only an explicit reorder
//! rewrites positions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Maximum order assumed when no FAQ exists yet.
pub const EMPTY_MAX_ORDER: i32 = 0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One entry of a reorder request: move FAQ `id` to position `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: DbId,
    pub order: i32,
}

/// Sort key for the display sequence.
///
/// Field order matters: the derived `Ord` compares `order` first, then
/// `created_at`, then `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayKey {
    pub order: i32,
    pub created_at: Timestamp,
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Position for a newly created FAQ: one past the largest existing order.
///
/// Returns `EMPTY_MAX_ORDER + 1` (i.e. `1`) when `existing` is empty, and
/// `None` when the largest order is already `i32::MAX`.
pub fn next_order<I>(existing: I) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    existing
        .into_iter()
        .max()
        .unwrap_or(EMPTY_MAX_ORDER)
        .max(EMPTY_MAX_ORDER)
        .checked_add(1)
}

/// Build a dense `0..N-1` reorder payload from ids in their desired sequence.
pub fn dense_positions(ids: &[DbId]) -> Vec<ReorderItem> {
    ids.iter()
        .zip(0..)
        .map(|(&id, order)| ReorderItem { id, order })
        .collect()
}

/// Whether the given orders, in any sequence, are exactly `0..N-1`.
pub fn is_dense<I>(orders: I) -> bool
where
    I: IntoIterator<Item = i32>,
{
    let mut sorted: Vec<i32> = orders.into_iter().collect();
    sorted.sort_unstable();
    sorted.iter().zip(0..).all(|(&order, expected)| order == expected)
}

/// Whether `keys` is already in display order.
pub fn is_display_sorted(keys: &[DisplayKey]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a reorder payload before it reaches the database.
///
/// Every order must be non-negative and no id may appear twice. Duplicate
/// orders are allowed.
pub fn validate_reorder(items: &[ReorderItem]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.order < 0 {
            return Err(format!(
                "Order for FAQ {} must be non-negative, got {}",
                item.id, item.order
            ));
        }
        if !seen.insert(item.id) {
            return Err(format!(
                "FAQ {} appears more than once in the reorder request",
                item.id
            ));
        }
    }
    Ok(())
}
