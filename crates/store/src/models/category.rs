//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use taskboard_core::nullable::deserialize_present;
use taskboard_core::types::EntityId;

/// A stored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// DTO for creating a category.
///
/// `name` is optional here so a missing name surfaces as a validation error
/// naming the field rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    /// Defaults to an empty string; `null` is treated the same.
    pub description: Option<String>,
}

/// DTO for partially updating a category.
///
/// Outer `None` = field absent (untouched). `Some(None)` = explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    /// `null` is rejected: a present name must be non-empty text.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Option<String>>,
    /// `null` resets the description to an empty string.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
}
