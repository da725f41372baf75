//! Taskboard domain layer.
//!
//! Pure types and rules shared by the store and the HTTP transport: id and
//! date types, [`error::CoreError`], field validation, the priority scale,
//! the overdue rule, and task list filter parsing. Nothing here locks or
//! performs I/O.

pub mod error;
pub mod nullable;
pub mod overdue;
pub mod priority;
pub mod task_filter;
pub mod types;
pub mod validation;
