//! Repository for categories.

use taskboard_core::error::CoreError;
use taskboard_core::types::EntityId;
use taskboard_core::validation::validate_required_text;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::Store;

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Validate and append a new category.
    pub fn create(store: &Store, input: &CreateCategory) -> Result<Category, CoreError> {
        let name = validate_required_text("name", input.name.as_deref())?;
        let description = input.description.clone().unwrap_or_default();

        let mut state = store.write();
        let category = Category {
            id: state.allocate_category_id(),
            name,
            description,
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    /// All categories in creation order.
    pub fn list(store: &Store) -> Vec<Category> {
        store.read().categories.clone()
    }

    /// Find a category by id.
    pub fn find_by_id(store: &Store, id: EntityId) -> Option<Category> {
        store.read().categories.iter().find(|c| c.id == id).cloned()
    }

    /// Apply the fields present in `input`.
    ///
    /// Returns `Ok(None)` if no category has this id. A bad name leaves the
    /// category untouched.
    pub fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, CoreError> {
        let mut state = store.write();
        let Some(category) = state.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        let name = input
            .name
            .as_ref()
            .map(|name| validate_required_text("name", name.as_deref()))
            .transpose()?;

        if let Some(name) = name {
            category.name = name;
        }
        if let Some(description) = &input.description {
            category.description = description.clone().unwrap_or_default();
        }
        Ok(Some(category.clone()))
    }

    /// Delete a category and null the reference on every task that used it.
    ///
    /// Returns `false` if no category has this id.
    pub fn delete(store: &Store, id: EntityId) -> bool {
        let mut state = store.write();
        let Some(index) = state.categories.iter().position(|c| c.id == id) else {
            return false;
        };

        let mut detached = 0usize;
        for task in state
            .tasks
            .iter_mut()
            .filter(|t| t.category_id == Some(id))
        {
            task.category_id = None;
            detached += 1;
        }
        state.categories.remove(index);

        tracing::debug!(category_id = id, detached, "Category deleted, tasks detached");
        true
    }
}
