//! Error taxonomy for the fetch proxy.
//!
//! # Design Decisions
//! - Every failure is caught at the handler boundary and converted into a
//!   JSON error envelope; nothing propagates past the handler.
//! - Input and method errors map to 4xx, upstream faults to 500.
//! - No retries anywhere: one invocation, one outbound attempt.

use axum::http::StatusCode;
use thiserror::Error;

/// Failures a single proxy invocation can produce.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Verb other than POST/OPTIONS.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Body was not valid JSON, or `url` was absent or empty.
    #[error("URL is required")]
    UrlRequired,

    /// `url` did not resolve to the allowed host.
    #[error("Invalid URL. Must be from {0}")]
    DisallowedOrigin(String),

    /// The configured upstream deadline fired before the response arrived.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// Network-level fault talking to the origin (DNS, refused, transfer).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Origin answered with a non-2xx status.
    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),
}

impl ProxyError {
    /// HTTP status the error envelope is sent with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::UrlRequired | ProxyError::DisallowedOrigin(_) => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamTimeout
            | ProxyError::Upstream(_)
            | ProxyError::UpstreamStatus(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProxyError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ProxyError::UrlRequired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ProxyError::DisallowedOrigin("nankankeiba.com".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ProxyError::UpstreamStatus(404).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ProxyError::UpstreamTimeout.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages_carry_context() {
        let e = ProxyError::UpstreamStatus(404);
        assert!(e.to_string().contains("404"));

        let e = ProxyError::DisallowedOrigin("nankankeiba.com".into());
        assert_eq!(e.to_string(), "Invalid URL. Must be from nankankeiba.com");
    }
}
