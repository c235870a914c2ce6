//! Agent configuration
//!
//! Defines all configurable parameters for the agent: the server to
//! poll and the polling interval.

use std::time::Duration;

/// Agent configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server base URL (e.g., "http://localhost:8080")
    pub server_url: String,

    /// How often to poll the server for a queued task
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(server_url: String) -> Self {
        Self {
            server_url,
            poll_interval: Duration::from_secs(5),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SERVER_URL (required)
    /// - POLL_INTERVAL (optional, seconds, default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        let server_url = std::env::var("SERVER_URL")
            .map_err(|_| anyhow::anyhow!("SERVER_URL environment variable not set"))?;

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));

        Ok(Self {
            server_url,
            poll_interval,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_url.is_empty() {
            anyhow::bail!("server_url cannot be empty");
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server_url must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty URL should fail
        config.server_url = String::new();
        assert!(config.validate().is_err());

        // Invalid URL should fail
        config.server_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.server_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        // Zero interval should fail
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
