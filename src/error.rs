// src/error.rs
// =============================================================================
// Error types for link-probe.
//
// There are two families of errors:
// - ProbeError: something went wrong while checking ONE url. These never
//   leave the prober; they are logged and turned into "unreachable".
// - ConfigError: the run itself cannot start (bad settings, unreadable file).
//
// Rust concepts:
// - thiserror: derive macro that writes the Display/Error impls for us
// - #[from]: automatic conversion so the ? operator works across error types
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a single probe failed to get an HTTP response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The attempt did not finish within its deadline and was aborted
    #[error("Request timed out")]
    Timeout,

    /// The hostname could not be resolved
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// Connection refused, reset or host unreachable
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Certificate or handshake problem
    #[error("TLS error: {0}")]
    Tls(String),

    /// Redirect loop or too many hops
    #[error("Too many redirects: {0}")]
    Redirect(String),

    /// Anything else reqwest reports (malformed response, bad url, ...)
    #[error("{0}")]
    Other(String),

    /// The probe was dropped before it produced any result
    #[error("Unknown error")]
    Unknown,
}

impl ProbeError {
    /// The category text written next to the url in the error log line.
    ///
    /// Timeouts and unknown failures get a fixed marker; everything else
    /// carries the underlying error message.
    pub fn log_message(&self) -> String {
        match self {
            ProbeError::Timeout => "Request timed out".to_string(),
            ProbeError::Unknown => "Unknown error".to_string(),
            ProbeError::Dns(msg)
            | ProbeError::Connect(msg)
            | ProbeError::Tls(msg)
            | ProbeError::Redirect(msg)
            | ProbeError::Other(msg) => msg.clone(),
        }
    }
}

// Sorts a reqwest error into one of our categories.
//
// reqwest errors can happen for many reasons and only some of them have a
// dedicated is_xxx() check, so DNS and TLS failures are recognised by
// looking at the full error chain text.
impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        // The url would leak into the substring checks below
        let error = error.without_url();
        let message = error_chain(&error);
        let lowered = message.to_lowercase();

        if error.is_timeout() {
            ProbeError::Timeout
        } else if error.is_redirect() {
            ProbeError::Redirect(message)
        } else if lowered.contains("dns") || lowered.contains("failed to lookup address") {
            ProbeError::Dns(message)
        } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
            ProbeError::Tls(message)
        } else if error.is_connect() {
            ProbeError::Connect(message)
        } else {
            ProbeError::Other(message)
        }
    }
}

// Joins an error and its sources into one line.
// reqwest's top-level message is often just "error sending request", the
// useful part lives further down the chain. hyper errors already print
// their cause, so a source whose text is already present is skipped.
fn error_chain(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = err.to_string();
    while let Some(src) = err.source() {
        let text = src.to_string();
        if !s.contains(&text) {
            s.push_str(": ");
            s.push_str(&text);
        }
        err = src;
    }
    s
}

/// Problems with the settings a run was started with.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("concurrency limit must be at least 1")]
    InvalidConcurrency,

    #[error("timeout must be at least 1 second")]
    InvalidTimeout,

    #[error("user agent must not be empty")]
    EmptyUserAgent,

    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
