//! Outbound fetch against the racing-site origin.
//!
//! # Responsibilities
//! - Issue the single GET per invocation with the configured browser
//!   identity
//! - Enforce the outbound connect and request deadlines
//! - Hand the body back as raw bytes; the origin serves Shift_JIS, which
//!   any automatic text decoding would corrupt
//!
//! # Design Decisions
//! - One shared `reqwest::Client` (connection pool) for the process
//! - Non-2xx statuses are errors here, before the body is read
//! - No retries: a failed fetch fails the invocation

use std::time::Duration;

use axum::body::Bytes;
use url::Url;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::error::ProxyError;

/// Raw page fetched from the origin.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status the origin answered with (always 2xx here).
    pub status: u16,

    /// Undecoded body bytes.
    pub body: Bytes,
}

/// HTTP client for the upstream origin.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client carrying the configured identity and deadlines.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(upstream.user_agent.clone())
            .timeout(Duration::from_millis(timeouts.upstream_millis))
            .connect_timeout(Duration::from_millis(timeouts.connect_millis))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch `url` and return the raw response bytes.
    pub async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, ProxyError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::UpstreamTimeout
            } else {
                ProxyError::Upstream(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::UpstreamTimeout
            } else {
                ProxyError::Upstream(e)
            }
        })?;

        Ok(FetchedPage { status: status.as_u16(), body })
    }
}
