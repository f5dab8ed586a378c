//! CORS-friendly fetch proxy for nankankeiba.com race cards.
//!
//! The racing site serves Shift_JIS pages and no CORS headers, so browser
//! frontends can neither fetch a race card cross-origin nor decode one
//! reliably. This service accepts a POST carrying a target URL, fetches the
//! page server-side with a desktop-browser identity, decodes the body to
//! UTF-8, and returns it in a JSON envelope.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request     ┌──────────────────────────────────────────────┐
//!   ──────────────────▶│  http/server  ─▶  http/handler               │
//!                      │                     │  validate payload      │
//!                      │                     │  upstream/origin check │
//!                      │                     ▼                        │
//!                      │               upstream/client ───────────────┼──▶ nankankeiba.com
//!                      │                     │  raw Shift_JIS bytes   │
//!                      │                     ▼                        │
//!   Client Response    │               encoding (SJIS → UTF-8)        │
//!   ◀──────────────────┼───────────────  JSON envelope                │
//!                      └──────────────────────────────────────────────┘
//!
//!   Cross-cutting: config, observability (logging + metrics), lifecycle
//! ```
//!
//! Each invocation is independent and stateless; nothing outlives a single
//! request/response cycle.

// Core subsystems
pub mod config;
pub mod encoding;
pub mod error;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
