//! Domain types, errors and input validation shared by the eindex crates.
//!
//! Nothing in here touches the database or the network.

pub mod attendance;
pub mod error;
pub mod record;
pub mod student;
pub mod types;
pub mod validation;
