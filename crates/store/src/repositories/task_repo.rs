//! Repository for tasks: CRUD, filtered listing, overdue listing and stats.

use chrono::NaiveDate;
use taskboard_core::error::CoreError;
use taskboard_core::overdue::today;
use taskboard_core::priority::Priority;
use taskboard_core::task_filter::TaskFilter;
use taskboard_core::types::EntityId;
use taskboard_core::validation::{
    coerce_truthy, validate_category_ref, validate_date, validate_priority,
    validate_required_text,
};

use crate::models::stats::TaskStats;
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::{Store, StoreState};

/// Validated field values for an update, staged before any assignment.
#[derive(Debug, Default)]
struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    category_id: Option<Option<EntityId>>,
    due_date: Option<Option<String>>,
    completed: Option<bool>,
    priority: Option<Priority>,
}

impl TaskChanges {
    /// Validate every present field of `input` against `state`.
    ///
    /// Fields are checked in declaration order and the first failure wins.
    fn validate(state: &StoreState, input: &UpdateTask) -> Result<Self, CoreError> {
        let title = input
            .title
            .as_ref()
            .map(|title| validate_required_text("title", title.as_deref()))
            .transpose()?;

        let description = input
            .description
            .as_ref()
            .map(|description| description.clone().unwrap_or_default());

        let category_id = input
            .category_id
            .map(|category_id| {
                validate_category_ref("category_id", category_id, |id| {
                    state.category_exists(id)
                })
            })
            .transpose()?;

        let due_date = input
            .due_date
            .as_ref()
            .map(|due_date| match due_date {
                Some(raw) => validate_date("due_date", raw).map(|_| Some(raw.clone())),
                None => Ok(None),
            })
            .transpose()?;

        let completed = input.completed.as_ref().map(coerce_truthy);

        let priority = input
            .priority
            .as_ref()
            .map(|priority| validate_priority("priority", Some(priority)))
            .transpose()?;

        Ok(Self {
            title,
            description,
            category_id,
            due_date,
            completed,
            priority,
        })
    }

    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(category_id) = self.category_id {
            task.category_id = category_id;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}

/// Provides CRUD and query operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Validate and append a new task.
    ///
    /// Checks run in order `title`, `category_id`, `due_date`, `priority`;
    /// on any failure nothing is stored and no id is consumed.
    pub fn create(store: &Store, input: &CreateTask) -> Result<Task, CoreError> {
        let title = validate_required_text("title", input.title.as_deref())?;

        // Hold the write guard across the category check so the referenced
        // category cannot disappear before the task is appended.
        let mut state = store.write();
        let category_id = validate_category_ref("category_id", input.category_id, |id| {
            state.category_exists(id)
        })?;
        if let Some(raw) = &input.due_date {
            validate_date("due_date", raw)?;
        }
        let priority = validate_priority("priority", input.priority.as_ref())?;

        let task = Task {
            id: state.allocate_task_id(),
            title,
            description: input.description.clone().unwrap_or_default(),
            category_id,
            due_date: input.due_date.clone(),
            completed: input.completed.as_ref().is_some_and(coerce_truthy),
            priority,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }

    /// Tasks passing `filter`, in creation order, evaluated against today.
    pub fn list(store: &Store, filter: &TaskFilter) -> Vec<Task> {
        Self::list_on(store, filter, today())
    }

    /// Tasks passing `filter`, in creation order, evaluated against `today`.
    pub fn list_on(store: &Store, filter: &TaskFilter, today: NaiveDate) -> Vec<Task> {
        store
            .read()
            .tasks
            .iter()
            .filter(|t| {
                filter.matches(t.category_id, t.completed, t.due_date.as_deref(), today)
            })
            .cloned()
            .collect()
    }

    /// Find a task by id.
    pub fn find_by_id(store: &Store, id: EntityId) -> Option<Task> {
        store.read().tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Apply the fields present in `input`.
    ///
    /// Returns `Ok(None)` if no task has this id. Every present field is
    /// validated before any is assigned, so a failure leaves the task as it
    /// was.
    pub fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, CoreError> {
        let mut state = store.write();
        let Some(index) = state.tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let changes = TaskChanges::validate(&state, input)?;
        let task = &mut state.tasks[index];
        changes.apply(task);
        Ok(Some(task.clone()))
    }

    /// Delete a task. Returns `false` if no task has this id.
    pub fn delete(store: &Store, id: EntityId) -> bool {
        let mut state = store.write();
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        state.tasks.len() != before
    }

    /// Incomplete tasks whose due date is before today.
    pub fn list_overdue(store: &Store) -> Vec<Task> {
        Self::list_overdue_on(store, today())
    }

    /// Incomplete tasks whose due date is before `today`.
    pub fn list_overdue_on(store: &Store, today: NaiveDate) -> Vec<Task> {
        store
            .read()
            .tasks
            .iter()
            .filter(|t| t.is_overdue_on(today))
            .cloned()
            .collect()
    }

    /// Aggregate counts, evaluated against today.
    pub fn stats(store: &Store) -> TaskStats {
        Self::stats_on(store, today())
    }

    /// Aggregate counts, evaluated against `today`.
    pub fn stats_on(store: &Store, today: NaiveDate) -> TaskStats {
        let state = store.read();
        let total_tasks = state.tasks.len();
        let completed = state.tasks.iter().filter(|t| t.completed).count();
        let overdue = state.tasks.iter().filter(|t| t.is_overdue_on(today)).count();
        TaskStats {
            total_tasks,
            completed,
            pending: total_tasks - completed,
            overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::models::category::CreateCategory;
    use crate::repositories::CategoryRepo;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_task(title: &str) -> CreateTask {
        CreateTask {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn add_category(store: &Store, name: &str) -> EntityId {
        CategoryRepo::create(
            store,
            &CreateCategory {
                name: Some(name.to_string()),
                description: None,
            },
        )
        .unwrap()
        .id
    }

    #[test]
    fn create_applies_defaults() {
        let store = Store::new();
        let task = TaskRepo::create(&store, &new_task(" Report ")).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Report");
        assert_eq!(task.description, "");
        assert_eq!(task.category_id, None);
        assert_eq!(task.due_date, None);
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn create_requires_title() {
        let store = Store::new();
        assert_matches!(
            TaskRepo::create(&store, &CreateTask::default()),
            Err(CoreError::InvalidInput { field: "title", .. })
        );
    }

    #[test]
    fn create_rejects_dangling_category() {
        let store = Store::new();
        let input = CreateTask {
            category_id: Some(5),
            ..new_task("t")
        };
        assert_matches!(
            TaskRepo::create(&store, &input),
            Err(CoreError::InvalidInput { field: "category_id", .. })
        );
        assert_eq!(store.task_count(), 0);
    }

    #[test]
    fn create_rejects_bad_date_and_priority() {
        let store = Store::new();
        let bad_date = CreateTask {
            due_date: Some("2024-02-30".into()),
            ..new_task("t")
        };
        assert_matches!(
            TaskRepo::create(&store, &bad_date),
            Err(CoreError::InvalidInput { field: "due_date", .. })
        );

        let bad_priority = CreateTask {
            priority: Some(json!("urgent")),
            ..new_task("t")
        };
        assert_matches!(
            TaskRepo::create(&store, &bad_priority),
            Err(CoreError::InvalidInput { field: "priority", .. })
        );
        assert_eq!(store.task_count(), 0);

        // Rejected creates do not consume ids.
        assert_eq!(TaskRepo::create(&store, &new_task("ok")).unwrap().id, 1);
    }

    #[test]
    fn create_empty_priority_is_medium_and_completed_is_coerced() {
        let store = Store::new();
        let input = CreateTask {
            priority: Some(json!("")),
            completed: Some(json!(1)),
            ..new_task("t")
        };
        let task = TaskRepo::create(&store, &input).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.completed);
    }

    #[test]
    fn create_falsy_priority_is_medium() {
        let store = Store::new();
        for falsy in [json!(false), json!(0)] {
            let input = CreateTask {
                priority: Some(falsy),
                ..new_task("t")
            };
            assert_eq!(TaskRepo::create(&store, &input).unwrap().priority, Priority::Medium);
        }

        let truthy_number = CreateTask {
            priority: Some(json!(5)),
            ..new_task("t")
        };
        assert_matches!(
            TaskRepo::create(&store, &truthy_number),
            Err(CoreError::InvalidInput { field: "priority", .. })
        );
    }

    #[test]
    fn update_title_only_leaves_other_fields() {
        let store = Store::new();
        let category_id = add_category(&store, "Work");
        let task = TaskRepo::create(
            &store,
            &CreateTask {
                description: Some("desc".into()),
                category_id: Some(category_id),
                due_date: Some("2024-01-01".into()),
                completed: Some(json!(true)),
                priority: Some(json!("low")),
                ..new_task("before")
            },
        )
        .unwrap();

        let updated = TaskRepo::update(
            &store,
            task.id,
            &UpdateTask {
                title: Some(Some("x".into())),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(updated, Task { title: "x".into(), ..task });
    }

    #[test]
    fn update_null_clears_absent_keeps() {
        let store = Store::new();
        let category_id = add_category(&store, "Work");
        let task = TaskRepo::create(
            &store,
            &CreateTask {
                category_id: Some(category_id),
                due_date: Some("2024-01-01".into()),
                ..new_task("t")
            },
        )
        .unwrap();

        let kept = TaskRepo::update(&store, task.id, &UpdateTask::default())
            .unwrap()
            .unwrap();
        assert_eq!(kept.due_date.as_deref(), Some("2024-01-01"));
        assert_eq!(kept.category_id, Some(category_id));

        let cleared = TaskRepo::update(
            &store,
            task.id,
            &UpdateTask {
                due_date: Some(None),
                category_id: Some(None),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(cleared.due_date, None);
        assert_eq!(cleared.category_id, None);
    }

    #[test]
    fn failing_field_aborts_whole_update() {
        let store = Store::new();
        let task = TaskRepo::create(&store, &new_task("t")).unwrap();

        let result = TaskRepo::update(
            &store,
            task.id,
            &UpdateTask {
                title: Some(Some("renamed".into())),
                completed: Some(json!(true)),
                priority: Some(json!("urgent")),
                ..Default::default()
            },
        );
        assert_matches!(result, Err(CoreError::InvalidInput { field: "priority", .. }));
        assert_eq!(TaskRepo::find_by_id(&store, task.id), Some(task));
    }

    #[test]
    fn update_rejects_dangling_category_and_null_title() {
        let store = Store::new();
        let task = TaskRepo::create(&store, &new_task("t")).unwrap();

        assert_matches!(
            TaskRepo::update(
                &store,
                task.id,
                &UpdateTask {
                    category_id: Some(Some(3)),
                    ..Default::default()
                }
            ),
            Err(CoreError::InvalidInput { field: "category_id", .. })
        );
        assert_matches!(
            TaskRepo::update(
                &store,
                task.id,
                &UpdateTask {
                    title: Some(None),
                    ..Default::default()
                }
            ),
            Err(CoreError::InvalidInput { field: "title", .. })
        );
    }

    #[test]
    fn update_null_priority_and_completed_normalize() {
        let store = Store::new();
        let task = TaskRepo::create(
            &store,
            &CreateTask {
                priority: Some(json!("high")),
                completed: Some(json!(true)),
                ..new_task("t")
            },
        )
        .unwrap();

        let updated = TaskRepo::update(
            &store,
            task.id,
            &UpdateTask {
                priority: Some(json!(null)),
                completed: Some(json!(null)),
                description: Some(None),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(updated.priority, Priority::Medium);
        assert!(!updated.completed);
        assert_eq!(updated.description, "");
    }

    #[test]
    fn update_unknown_returns_none_before_validating() {
        let store = Store::new();
        let result = TaskRepo::update(
            &store,
            42,
            &UpdateTask {
                title: Some(Some(String::new())),
                ..Default::default()
            },
        );
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn delete_removes_only_target() {
        let store = Store::new();
        let a = TaskRepo::create(&store, &new_task("a")).unwrap();
        let b = TaskRepo::create(&store, &new_task("b")).unwrap();
        assert!(TaskRepo::delete(&store, a.id));
        assert!(!TaskRepo::delete(&store, a.id));
        assert_eq!(TaskRepo::list(&store, &TaskFilter::default()), vec![b]);
    }

    #[test]
    fn overdue_boundary() {
        let store = Store::new();
        let today = day(2024, 5, 10);
        let due_today = TaskRepo::create(
            &store,
            &CreateTask {
                due_date: Some("2024-05-10".into()),
                ..new_task("today")
            },
        )
        .unwrap();
        let due_yesterday = TaskRepo::create(
            &store,
            &CreateTask {
                due_date: Some("2024-05-09".into()),
                ..new_task("yesterday")
            },
        )
        .unwrap();
        TaskRepo::create(
            &store,
            &CreateTask {
                due_date: Some("2024-05-09".into()),
                completed: Some(json!(true)),
                ..new_task("done")
            },
        )
        .unwrap();

        let overdue = TaskRepo::list_overdue_on(&store, today);
        assert_eq!(overdue, vec![due_yesterday.clone()]);

        let not_overdue = TaskRepo::list_on(
            &store,
            &TaskFilter {
                overdue: Some(false),
                ..Default::default()
            },
            today,
        );
        assert!(not_overdue.contains(&due_today));
        assert!(!not_overdue.contains(&due_yesterday));
    }

    #[test]
    fn unparseable_stored_date_is_not_overdue() {
        let store = Store::new();
        let task = TaskRepo::create(&store, &new_task("t")).unwrap();
        store.write().tasks[0].due_date = Some("not-a-date".into());

        assert!(TaskRepo::list_overdue_on(&store, day(2024, 5, 10)).is_empty());
        assert_eq!(TaskRepo::stats_on(&store, day(2024, 5, 10)).overdue, 0);
        assert!(TaskRepo::find_by_id(&store, task.id).is_some());
    }

    #[test]
    fn stats_counts() {
        let store = Store::new();
        TaskRepo::create(&store, &new_task("a")).unwrap();
        TaskRepo::create(
            &store,
            &CreateTask {
                completed: Some(json!(true)),
                ..new_task("b")
            },
        )
        .unwrap();
        TaskRepo::create(
            &store,
            &CreateTask {
                due_date: Some("2020-01-01".into()),
                ..new_task("c")
            },
        )
        .unwrap();

        let stats = TaskRepo::stats_on(&store, day(2024, 5, 10));
        assert_eq!(
            stats,
            TaskStats {
                total_tasks: 3,
                completed: 1,
                pending: 2,
                overdue: 1,
            }
        );
    }
}
