//! Upstream origin subsystem.
//!
//! # Data Flow
//! ```text
//! caller-supplied url
//!     → origin.rs (parse, host check)
//!     → client.rs (GET with browser identity, deadline)
//!     → FetchedPage (status + raw bytes)
//! ```

pub mod client;
pub mod origin;

pub use client::{FetchedPage, UpstreamClient};
pub use origin::validate_target;
