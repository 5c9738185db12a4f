//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching a
//! database row, plus the input types its repository accepts.

pub mod attendance;
pub mod record;
pub mod student;
pub mod subject;
