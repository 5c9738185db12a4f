//! Client side of the e-index: a typed HTTP client for the REST API plus the
//! RFID kiosk state used by the `eindex-kiosk` binary.

pub mod api;
pub mod config;
pub mod error;
pub mod roster;
pub mod scanner;
pub mod session;
pub mod types;
