//! Response envelopes.
//!
//! # Responsibilities
//! - Define the JSON bodies the endpoint returns
//! - Map `ProxyError` values onto error envelopes
//!
//! # Design Decisions
//! - One error shape for every failure class:
//!   `{"success":false,"error":"…"}` with the class expressed in the HTTP
//!   status. Successes are `{"success":true,"html":"…","length":n}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::encoding::DecodedPage;
use crate::error::ProxyError;

/// Success envelope carrying the decoded page.
#[derive(Debug, Serialize)]
pub struct PagePayload {
    pub success: bool,
    pub html: String,
    pub length: usize,
}

impl From<DecodedPage> for PagePayload {
    fn from(page: DecodedPage) -> Self {
        Self {
            success: true,
            html: page.html,
            length: page.length,
        }
    }
}

impl IntoResponse for PagePayload {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let payload = ErrorPayload {
            success: false,
            error: self.to_string(),
        };
        (status, Json(payload)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let payload = PagePayload::from(DecodedPage {
            html: "<html></html>".into(),
            length: 13,
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["html"], "<html></html>");
        assert_eq!(json["length"], 13);
    }

    #[test]
    fn test_error_envelope_shape() {
        let payload = ErrorPayload {
            success: false,
            error: "URL is required".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "URL is required");
    }
}
