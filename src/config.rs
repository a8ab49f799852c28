//! Application configuration.
//!
//! Defaults suit the bundled event; environment variables and CLI flags
//! override them.

use crate::conference::DEFAULT_ENDPOINT;

/// Event name used in share messages.
pub const DEFAULT_EVENT_NAME: &str = "React Conf 2025";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_ENDPOINT: &str = "CONFDECK_ENDPOINT";
pub const ENV_EVENT_NAME: &str = "CONFDECK_EVENT_NAME";
pub const ENV_LOG: &str = "CONFDECK_LOG";

/// Runtime configuration.
///
/// # Example
///
/// ```
/// use confdeck::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_endpoint("http://localhost:9000/all")
///     .with_event_name("RustConf");
/// assert_eq!(config.event_name, "RustConf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// URL of the schedule document
    pub endpoint: String,
    /// Event name quoted in share messages
    pub event_name: String,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            event_name: DEFAULT_EVENT_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = event_name.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `CONFDECK_ENDPOINT`, `CONFDECK_EVENT_NAME`
    /// and `CONFDECK_LOG`. Empty variables are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = env_value(ENV_ENDPOINT) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(name) = env_value(ENV_EVENT_NAME) {
            config = config.with_event_name(name);
        }
        if let Some(filter) = env_value(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        config
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
