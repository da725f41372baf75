//! Field validators applied before any store mutation.
//!
//! Each validator is a pure function: it either returns the normalized value
//! or a [`CoreError::InvalidInput`] naming the offending field. None of them
//! touch store state; the category reference check receives an existence
//! predicate from the caller.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde_json::Value;

use crate::error::CoreError;
use crate::priority::Priority;
use crate::types::{EntityId, DATE_FORMAT};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shape of a due date before it is handed to the calendar parser.
pub const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Tokens accepted as `true` by list filters (compared lowercase).
pub const TRUE_TOKENS: &[&str] = &["true", "1"];

/// Tokens accepted as `false` by list filters (compared lowercase).
pub const FALSE_TOKENS: &[&str] = &["false", "0"];

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` calendar date.
///
/// The string must match [`DATE_PATTERN`] exactly and name a real day in
/// years 1 through 9999, so `2024-02-30`, `2024-1-05` and `0000-01-01` are
/// all rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Validate a date field, returning the parsed date.
pub fn validate_date(field: &'static str, value: &str) -> Result<NaiveDate, CoreError> {
    parse_date(value).ok_or_else(|| CoreError::invalid(field, "must be a YYYY-MM-DD date"))
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Validate that `value` is non-empty after trimming; returns the trimmed text.
pub fn validate_non_empty(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid(field, "must be a non-empty string"));
    }
    Ok(trimmed.to_string())
}

/// Like [`validate_non_empty`], but a missing or `null` value is also invalid.
pub fn validate_required_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<String, CoreError> {
    match value {
        Some(text) => validate_non_empty(field, text),
        None => Err(CoreError::invalid(field, "is required")),
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Validate a priority value.
///
/// A missing or falsy value (`null`, `false`, `0`, `""`, ...) means `medium`.
/// Any other value must be one of the priority names.
pub fn validate_priority(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Priority, CoreError> {
    let invalid = || {
        CoreError::invalid(
            field,
            format!("must be one of: {}", Priority::accepted_values()),
        )
    };
    match value {
        None => Ok(Priority::Medium),
        Some(value) if !coerce_truthy(value) => Ok(Priority::Medium),
        Some(Value::String(raw)) => raw.parse::<Priority>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

// ---------------------------------------------------------------------------
// Category reference
// ---------------------------------------------------------------------------

/// Validate an optional category reference.
///
/// `None` is always valid (no category). A set id must satisfy `exists`.
pub fn validate_category_ref(
    field: &'static str,
    category_id: Option<EntityId>,
    exists: impl Fn(EntityId) -> bool,
) -> Result<Option<EntityId>, CoreError> {
    match category_id {
        Some(id) if !exists(id) => Err(CoreError::invalid(
            field,
            format!("category {id} does not exist"),
        )),
        other => Ok(other),
    }
}

// ---------------------------------------------------------------------------
// Query tokens
// ---------------------------------------------------------------------------

/// Parse a boolean query token (`true`/`1`/`false`/`0`, case-insensitive).
pub fn parse_bool_token(field: &'static str, value: &str) -> Result<bool, CoreError> {
    let lowered = value.to_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(CoreError::invalid(field, "must be true/false"))
    }
}

/// Parse an integer id from a query token.
pub fn parse_id_token(field: &'static str, value: &str) -> Result<EntityId, CoreError> {
    value
        .trim()
        .parse::<EntityId>()
        .map_err(|_| CoreError::invalid(field, "must be an integer"))
}

// ---------------------------------------------------------------------------
// Loose booleans
// ---------------------------------------------------------------------------

/// JSON truthiness: `null`, `false`, zero, `""`, `[]` and `{}` are false.
pub fn coerce_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
