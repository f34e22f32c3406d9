//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-replace PUTs
//!
//! JSON field names are camelCase at the HTTP boundary, so every
//! (de)serializable struct carries `serde(rename_all = "camelCase")`.

pub mod difficulty;
pub mod region;
pub mod walk;
