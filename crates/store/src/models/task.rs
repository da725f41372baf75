//! Task entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_core::error::CoreError;
use taskboard_core::nullable::deserialize_present;
use taskboard_core::overdue::is_overdue;
use taskboard_core::priority::Priority;
use taskboard_core::task_filter::TaskFilter;
use taskboard_core::types::EntityId;

/// A stored task.
///
/// `category_id` is a weak reference: deleting the category nulls it.
/// `due_date` is kept as the validated `YYYY-MM-DD` text clients sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category_id: Option<EntityId>,
    pub due_date: Option<String>,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    /// Whether this task is overdue on `today`.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        is_overdue(self.due_date.as_deref(), self.completed, today)
    }
}

/// DTO for creating a task.
///
/// Every field is optional at the wire level; `title` is required by
/// validation and reported as an invalid field when missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    /// Defaults to an empty string; `null` is treated the same.
    pub description: Option<String>,
    pub category_id: Option<EntityId>,
    pub due_date: Option<String>,
    /// Any JSON value, coerced by truthiness. Defaults to `false`.
    #[serde(default)]
    pub completed: Option<Value>,
    /// Missing or falsy (`null`, `false`, `0`, `""`) means `medium`.
    #[serde(default)]
    pub priority: Option<Value>,
}

/// DTO for partially updating a task.
///
/// Outer `None` = field absent (untouched). `Some(None)` = explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    /// `null` is rejected.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Option<String>>,
    /// `null` resets the description to an empty string.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    /// `null` clears the category reference.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category_id: Option<Option<EntityId>>,
    /// `null` clears the due date.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<String>>,
    /// Coerced by truthiness; `null` sets `false`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub completed: Option<Value>,
    /// A falsy value resets to `medium`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub priority: Option<Value>,
}

/// Query parameters for `GET /api/tasks`, as raw tokens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListParams {
    pub category_id: Option<String>,
    pub completed: Option<String>,
    pub overdue: Option<String>,
}

impl TaskListParams {
    /// Parse the raw tokens into a [`TaskFilter`].
    pub fn to_filter(&self) -> Result<TaskFilter, CoreError> {
        TaskFilter::parse(
            self.category_id.as_deref(),
            self.completed.as_deref(),
            self.overdue.as_deref(),
        )
    }
}
