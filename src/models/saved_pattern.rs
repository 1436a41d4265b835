//! Saved pattern model, persisted as one JSON array under a single storage key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named, user-saved pattern.
///
/// Records are immutable once created: `id` and `created_at` are assigned by
/// the store and never change, and there is no update operation. The
/// persisted field names are camelCase to match the existing on-disk layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPattern {
    pub id: String,
    pub name: String,
    pub pattern: String,
    pub description: String,
    pub example: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for saving a pattern. `id`/`created_at` are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSavedPattern {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
}
