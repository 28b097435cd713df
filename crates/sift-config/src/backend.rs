//! Document-indexing backend connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default backend origin.
fn default_base_url() -> String {
    String::from("http://localhost:8000")
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("docsift/0.1")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Backend origin, without the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds. `0` leaves the transport default
    /// (no timeout), which large uploads and index builds rely on.
    #[serde(default)]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// `None` when no request timeout is configured.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_secs))
        }
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the base URL is an absolute http(s) origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the scheme is not `http` or
    /// `https`, or nothing follows the scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rest = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"));

        match rest {
            Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
            Some(_) => Err(ConfigError::InvalidValue {
                field: "backend.base_url".into(),
                reason: "missing host".into(),
            }),
            None => Err(ConfigError::InvalidValue {
                field: "backend.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = BackendConfig::default();
        assert_eq!(config.origin(), "http://localhost:8000");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn origin_strips_trailing_slash() {
        let config = BackendConfig {
            base_url: "https://index.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.origin(), "https://index.example.com");
    }

    #[test]
    fn rejects_non_http_urls() {
        for url in ["ftp://host", "localhost:8000", "http://", "https:///"] {
            let config = BackendConfig {
                base_url: url.into(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{url} should be rejected");
        }
    }

    #[test]
    fn request_timeout_when_set() {
        let config = BackendConfig {
            request_timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }
}
