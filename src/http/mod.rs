//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, CORS headers)
//!     → handler.rs (method gate, payload parse, fetch, decode)
//!     → response.rs (JSON envelope)
//!     → Send to client
//! ```

pub mod handler;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
