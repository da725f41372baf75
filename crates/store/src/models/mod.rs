//! Entity structs and request DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct with exactly the fields clients see
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO where absent and `null` are distinguished

pub mod category;
pub mod stats;
pub mod task;
