//! Null-versus-absent handling for partial update payloads.
//!
//! Plain serde collapses a missing key and an explicit `null` into `None`.
//! Patch DTOs need them apart: absent leaves a field untouched, `null`
//! clears it. Use [`deserialize_present`] together with `#[serde(default)]`
//! on an `Option<Option<T>>` field:
//!
//! ```
//! use serde::Deserialize;
//! use taskboard_core::nullable::deserialize_present;
//!
//! #[derive(Deserialize)]
//! struct Patch {
//!     #[serde(default, deserialize_with = "deserialize_present")]
//!     due_date: Option<Option<String>>,
//! }
//!
//! let absent: Patch = serde_json::from_str("{}").unwrap();
//! assert_eq!(absent.due_date, None);
//!
//! let cleared: Patch = serde_json::from_str(r#"{"due_date": null}"#).unwrap();
//! assert_eq!(cleared.due_date, Some(None));
//! ```

use serde::{Deserialize, Deserializer};

/// Wrap whatever value is present (including `null`) in `Some`.
///
/// Only invoked by serde when the key exists, so `#[serde(default)]` yields
/// `None` for a missing key.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
