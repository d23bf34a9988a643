//! Command handlers.
//!
//! Each handler is a thin layer over `AppCore` that formats output for the
//! terminal.

pub mod loaddata;
pub mod paths;
pub mod results;
pub mod serve;
pub mod tokens;
pub mod users;
