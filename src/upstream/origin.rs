//! Target URL validation.
//!
//! # Responsibilities
//! - Parse the caller-supplied URL before any network activity
//! - Accept only http/https URLs whose host is the allowed domain or one of
//!   its subdomains
//!
//! # Design Decisions
//! - The host component is checked, never the URL string. A substring test
//!   would accept `https://evil.example/nankankeiba.com` and
//!   `https://nankankeiba.com.evil.example/`; both must be rejected
//! - Host matching is case-insensitive
//! - Ports are irrelevant to the check

use url::Url;

use crate::error::ProxyError;

/// Parse `raw` and verify it targets the allowed host.
///
/// Returns the parsed URL so the fetch step works from the same value the
/// check approved.
pub fn validate_target(raw: &str, allowed_host: &str) -> Result<Url, ProxyError> {
    let disallowed = || ProxyError::DisallowedOrigin(allowed_host.to_string());

    let url = Url::parse(raw).map_err(|_| disallowed())?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(disallowed()),
    }

    let host = url.host_str().ok_or_else(disallowed)?;
    if host_matches(host, allowed_host) {
        Ok(url)
    } else {
        Err(disallowed())
    }
}

/// True if `host` is `allowed` or a subdomain of it.
fn host_matches(host: &str, allowed: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let allowed = allowed.to_ascii_lowercase();

    host == allowed || host.strip_suffix(&allowed).is_some_and(|rest| rest.ends_with('.'))
}
