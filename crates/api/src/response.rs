//! Response envelope types for list endpoints.
//!
//! Single entities are returned bare; collections are wrapped in a named
//! key, with a `count` alongside task collections.

use serde::Serialize;
use taskboard_store::models::category::Category;
use taskboard_store::models::task::Task;

/// `{ "categories": [...] }`
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

/// `{ "tasks": [...], "count": n }`
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub count: usize,
    pub tasks: Vec<Task>,
}

impl TaskListResponse {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            count: tasks.len(),
            tasks,
        }
    }
}

/// `{ "overdue_tasks": [...], "count": n }`
#[derive(Debug, Serialize)]
pub struct OverdueTasksResponse {
    pub count: usize,
    pub overdue_tasks: Vec<Task>,
}

impl OverdueTasksResponse {
    pub fn new(overdue_tasks: Vec<Task>) -> Self {
        Self {
            count: overdue_tasks.len(),
            overdue_tasks,
        }
    }
}
