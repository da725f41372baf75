//! Repository layer.
//!
//! Each repository is a zero-sized struct providing synchronous CRUD methods
//! that accept `&Store` as the first argument. Lookups return `Option`,
//! deletes return `bool`, and updates return `Ok(None)` when the id is
//! unknown; callers turn those into not-found errors.

pub mod category_repo;
pub mod task_repo;

pub use category_repo::CategoryRepo;
pub use task_repo::TaskRepo;
