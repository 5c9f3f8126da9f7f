// src/config.rs
// =============================================================================
// Settings for a probing run.
//
// Settings are layered:
// 1. Built-in defaults (Config::default)
// 2. An optional TOML file (--config)
// 3. Command-line flags (applied in main.rs)
//
// Example config file:
//
//   concurrency = 50
//   timeout_secs = 10
//   user_agent = "my-checker/1.0"
//   max_redirects = 5
//
// Every field is optional in the file; missing ones keep their default.
// =============================================================================

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Number of probes launched together in one window
pub const DEFAULT_CONCURRENCY: usize = 100;

/// Per-attempt deadline for HEAD and for the GET fallback
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Same hop limit browsers use
pub const DEFAULT_MAX_REDIRECTS: usize = 20;

/// Servers reject or throttle requests without a browser-looking User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Window size, also the upper bound on in-flight probes
    pub concurrency: usize,
    /// Timeout for each individual request, in seconds
    pub timeout_secs: u64,
    /// Value of the User-Agent header sent with every request
    pub user_agent: String,
    /// How many redirects a single request may follow
    pub max_redirects: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl Config {
    /// Reads a TOML config file. Fields missing from the file use defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Checks the values make sense before any request is sent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }
        self.validate_request()
    }

    /// Checks only the settings that shape a single request
    /// (timeout and User-Agent). The window size is not looked at.
    pub fn validate_request(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
