//! Domain model structs.
//!
//! Each submodule holds a `FromRow` + `Serialize` entity struct matching the
//! database row.

pub mod post;
