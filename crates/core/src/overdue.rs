//! The overdue rule.
//!
//! A task is overdue when its due date is set, parses as a calendar date,
//! falls strictly before today, and the task is not completed. "Today" is the
//! local wall-clock date at evaluation time.

use chrono::{Local, NaiveDate};

use crate::validation::parse_date;

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether a task with the given `due_date` and `completed` flag is overdue
/// on `today`.
///
/// A stored date that does not parse is treated as not overdue.
pub fn is_overdue(due_date: Option<&str>, completed: bool, today: NaiveDate) -> bool {
    if completed {
        return false;
    }
    due_date
        .and_then(parse_date)
        .is_some_and(|due| due < today)
}
