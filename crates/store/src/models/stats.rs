//! Aggregate task counts.

use serde::Serialize;

/// Totals returned by `GET /api/tasks/stats`.
///
/// `pending` is always `total_tasks - completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total_tasks: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}
