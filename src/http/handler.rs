//! The proxy fetch handler.
//!
//! # Responsibilities
//! - Gate on method (POST does the work, OPTIONS is the CORS preflight)
//! - Parse and validate the request payload before any network activity
//! - Fetch the target page, decode it from Shift_JIS, envelope the result
//!
//! # Design Decisions
//! - Every path and every verb lands here; the original function was
//!   routed the same way by its hosting platform
//! - Fails closed: malformed input never reaches the fetch step
//! - All failures convert to JSON envelopes at this boundary

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::encoding::decode_shift_jis;
use crate::error::ProxyError;
use crate::http::response::PagePayload;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::validate_target;

/// Request payload: the race-card URL to fetch.
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    url: Option<String>,
}

/// Handle one proxy invocation.
pub async fn fetch_race_card(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // CORS preflight: 200, empty body. Headers come from the middleware
    // stack so they match every other response.
    if method == Method::OPTIONS {
        metrics::record_request(method.as_str(), 200, start);
        return StatusCode::OK.into_response();
    }

    let response = match handle_fetch(&state, &request_id, request).await {
        Ok(page) => page.into_response(),
        Err(error) => {
            tracing::warn!(request_id = %request_id, error = %error, "fetch failed");
            error.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

/// Validate, fetch, decode. All fallible steps funnel through here so the
/// caller converts any failure into the error envelope.
async fn handle_fetch(
    state: &AppState,
    request_id: &str,
    request: Request<Body>,
) -> Result<PagePayload, ProxyError> {
    if request.method() != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }

    let bytes = axum::body::to_bytes(request.into_body(), state.config.listener.max_body_bytes)
        .await
        .map_err(|_| ProxyError::UrlRequired)?;

    let payload: FetchRequest =
        serde_json::from_slice(&bytes).map_err(|_| ProxyError::UrlRequired)?;
    let raw_url = payload
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(ProxyError::UrlRequired)?;

    let url = validate_target(raw_url, &state.config.upstream.allowed_host)?;

    tracing::info!(request_id = %request_id, url = %url, "fetching race card");

    let page = state.upstream.fetch_page(&url).await?;
    let decoded = decode_shift_jis(&page.body);

    tracing::info!(
        request_id = %request_id,
        url = %url,
        upstream_status = page.status,
        length = decoded.length,
        "race card fetched and decoded"
    );

    Ok(PagePayload::from(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_url() {
        let payload: FetchRequest =
            serde_json::from_str(r#"{"url":"https://nankankeiba.com/"}"#).unwrap();
        assert_eq!(payload.url.as_deref(), Some("https://nankankeiba.com/"));
    }

    #[test]
    fn test_payload_without_url_field() {
        let payload: FetchRequest = serde_json::from_str("{}").unwrap();
        assert!(payload.url.is_none());
    }

    #[test]
    fn test_payload_with_null_url() {
        let payload: FetchRequest = serde_json::from_str(r#"{"url":null}"#).unwrap();
        assert!(payload.url.is_none());
    }

    #[test]
    fn test_payload_ignores_extra_fields() {
        let payload: FetchRequest =
            serde_json::from_str(r#"{"url":"https://nankankeiba.com/","ttl":5}"#).unwrap();
        assert!(payload.url.is_some());
    }
}
