//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check the allowed host is a bare host, not a URL fragment
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "upstream.allowed_host").
    pub field: String,

    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".into(),
            message: format!("not a valid socket address: {:?}", config.listener.bind_address),
        });
    }

    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError {
            field: "listener.max_body_bytes".into(),
            message: "must be greater than zero".into(),
        });
    }

    let host = config.upstream.allowed_host.trim();
    if host.is_empty() {
        errors.push(ValidationError {
            field: "upstream.allowed_host".into(),
            message: "must not be empty".into(),
        });
    } else if host.contains('/') || host.contains(':') {
        errors.push(ValidationError {
            field: "upstream.allowed_host".into(),
            message: format!("must be a bare host name, got {:?}", host),
        });
    }

    if config.upstream.user_agent.trim().is_empty() {
        errors.push(ValidationError {
            field: "upstream.user_agent".into(),
            message: "must not be empty".into(),
        });
    } else if config.upstream.user_agent.chars().any(|c| c.is_control()) {
        errors.push(ValidationError {
            field: "upstream.user_agent".into(),
            message: "must not contain control characters".into(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".into(),
            message: "must be greater than zero".into(),
        });
    }
    if config.timeouts.upstream_millis == 0 {
        errors.push(ValidationError {
            field: "timeouts.upstream_millis".into(),
            message: "must be greater than zero".into(),
        });
    }
    if config.timeouts.connect_millis == 0 {
        errors.push(ValidationError {
            field: "timeouts.connect_millis".into(),
            message: "must be greater than zero".into(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".into(),
            message: format!(
                "not a valid socket address: {:?}",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_allowed_host_rejected() {
        let mut config = ProxyConfig::default();
        config.upstream.allowed_host = "".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "upstream.allowed_host"));
    }

    #[test]
    fn test_allowed_host_must_be_bare() {
        let mut config = ProxyConfig::default();
        config.upstream.allowed_host = "https://nankankeiba.com/".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut config = ProxyConfig::default();
        config.timeouts.upstream_millis = 0;
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.user_agent = "".into();
        config.observability.metrics_address = "also bad".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
