//! Messaging transport configuration.

use std::time::Duration;

use crate::error::{MessagingError, Result};

/// Default messaging service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://chat.signal.org";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_SERVICE_URL: &str = "COURIER_SERVICE_URL";
pub const ENV_TIMEOUT_SECS: &str = "COURIER_HTTP_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "COURIER_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingConfig {
    /// Service root without a trailing slash. Empty disables the transport.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl MessagingConfig {
    /// Reads the configuration from `COURIER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_SERVICE_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        if !base_url.is_empty()
            && !(base_url.starts_with("https://") || base_url.starts_with("http://"))
        {
            return Err(MessagingError::invalid_config(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_SERVICE_URL, base_url
            )));
        }

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    MessagingError::invalid_config(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        ENV_TIMEOUT_SECS, raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let user_agent = lookup(ENV_USER_AGENT)
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            base_url,
            timeout,
            user_agent,
        })
    }

    /// Whether a transport should be built from this configuration.
    pub fn is_enabled(&self) -> bool {
        !self.base_url.is_empty()
    }
}

fn default_user_agent() -> String {
    format!("courier/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<MessagingConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MessagingConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, MessagingConfig::default());
        assert!(config.is_enabled());
        assert!(config.user_agent.starts_with("courier/"));
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            (ENV_SERVICE_URL, "http://localhost:8080/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_USER_AGENT, "tests"),
        ])
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_empty_url_disables_transport() {
        let config = from_pairs(&[(ENV_SERVICE_URL, "")]).unwrap();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            from_pairs(&[(ENV_SERVICE_URL, "ftp://example.org")]),
            Err(MessagingError::InvalidConfig(_))
        ));
        assert!(matches!(
            from_pairs(&[(ENV_TIMEOUT_SECS, "soon")]),
            Err(MessagingError::InvalidConfig(_))
        ));
    }
}
