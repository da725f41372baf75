/// Category and task ids. Assigned sequentially from 1, never reused.
pub type EntityId = i64;

/// Calendar date format for `due_date` (`YYYY-MM-DD`, no time component).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
