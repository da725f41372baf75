//! Task list filters.
//!
//! Filters arrive as raw query-string tokens. [`TaskFilter::parse`] turns
//! them into typed predicates, rejecting tokens that are not integers or
//! recognized booleans. Present filters compose by logical AND.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::overdue::is_overdue;
use crate::types::EntityId;
use crate::validation::{parse_bool_token, parse_id_token};

/// Parsed task list filters. `None` means "do not filter on this".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub category_id: Option<EntityId>,
    pub completed: Option<bool>,
    pub overdue: Option<bool>,
}

impl TaskFilter {
    /// Parse raw filter tokens.
    pub fn parse(
        category_id: Option<&str>,
        completed: Option<&str>,
        overdue: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            category_id: category_id
                .map(|raw| parse_id_token("category_id", raw))
                .transpose()?,
            completed: completed
                .map(|raw| parse_bool_token("completed", raw))
                .transpose()?,
            overdue: overdue
                .map(|raw| parse_bool_token("overdue", raw))
                .transpose()?,
        })
    }

    /// Whether a task with these fields passes every set filter.
    pub fn matches(
        &self,
        category_id: Option<EntityId>,
        completed: bool,
        due_date: Option<&str>,
        today: NaiveDate,
    ) -> bool {
        if let Some(want) = self.category_id {
            if category_id != Some(want) {
                return false;
            }
        }
        if let Some(want) = self.completed {
            if completed != want {
                return false;
            }
        }
        if let Some(want) = self.overdue {
            if is_overdue(due_date, completed, today) != want {
                return false;
            }
        }
        true
    }
}
