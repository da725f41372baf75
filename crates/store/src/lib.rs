//! In-memory task and category store.
//!
//! [`Store`] owns both collections and both id counters behind a single
//! `RwLock`. Repositories in [`repositories`] are the only code that reads
//! or mutates them; every repository method takes `&Store` as its first
//! argument.

pub mod models;
pub mod repositories;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use taskboard_core::types::EntityId;

use crate::models::category::Category;
use crate::models::task::Task;

/// Collections and counters guarded together by [`Store`].
///
/// Vectors keep insertion order, which is the listing order.
#[derive(Debug)]
pub(crate) struct StoreState {
    pub(crate) categories: Vec<Category>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) next_category_id: EntityId,
    pub(crate) next_task_id: EntityId,
}

impl StoreState {
    fn new() -> Self {
        Self {
            categories: Vec::new(),
            tasks: Vec::new(),
            next_category_id: 1,
            next_task_id: 1,
        }
    }

    pub(crate) fn category_exists(&self, id: EntityId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Hand out the next category id. Ids are never reused.
    pub(crate) fn allocate_category_id(&mut self) -> EntityId {
        let id = self.next_category_id;
        self.next_category_id += 1;
        id
    }

    /// Hand out the next task id. Ids are never reused.
    pub(crate) fn allocate_task_id(&mut self) -> EntityId {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }
}

/// Process-lifetime owner of all categories and tasks.
///
/// Multi-entity operations (category deletion with its task cascade) run
/// under one write guard, so readers never observe a half-applied cascade.
/// Wrap in `Arc` to share across request handlers.
#[derive(Debug)]
pub struct Store {
    state: RwLock<StoreState>,
}

impl Store {
    /// Create an empty store; the first category and task both get id 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::new()),
        }
    }

    /// Number of categories currently stored.
    pub fn category_count(&self) -> usize {
        self.read().categories.len()
    }

    /// Number of tasks currently stored.
    pub fn task_count(&self) -> usize {
        self.read().tasks.len()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
