//! Process lifecycle.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is a broadcast signal; the server drains in-flight requests
//!   before exiting

pub mod shutdown;

pub use shutdown::Shutdown;
