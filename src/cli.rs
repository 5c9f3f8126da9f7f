// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Settings that also exist in the config file are Options here: None means
// "not given on the command line, keep the config/default value".
// =============================================================================

use crate::config::Config;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-probe",
    version,
    about = "Check a list of URLs for reachability",
    long_about = "link-probe sends a HEAD request to every URL (GET when HEAD is not allowed) \
                  and reports which ones answer with a status below 400. \
                  URLs are checked in windows of --concurrency at a time."
)]
pub struct Cli {
    /// URLs to probe
    ///
    /// Example: link-probe https://www.rust-lang.org https://docs.rs
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line ('#' starts a comment)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Number of URLs probed together in one window (default: 100)
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds (default: 15)
    #[arg(short, long = "timeout")]
    pub timeout_secs: Option<u64>,

    /// Override the User-Agent header
    #[arg(long)]
    pub user_agent: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the URL -> reachable mapping as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 when at least one URL is unreachable
    #[arg(long)]
    pub fail_on_unreachable: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    // Command-line flags win over whatever the config file said
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = Cli::parse_from([
            "link-probe",
            "https://a.example",
            "https://b.example",
            "-c",
            "10",
            "--timeout",
            "3",
            "--json",
        ]);
        assert_eq!(cli.urls.len(), 2);
        assert_eq!(cli.concurrency, Some(10));
        assert_eq!(cli.timeout_secs, Some(3));
        assert!(cli.json);
        assert!(!cli.fail_on_unreachable);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides_only_touch_given_flags() {
        let cli = Cli::parse_from(["link-probe", "--concurrency", "5"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.concurrency, 5);
        assert_eq!(config, Config { concurrency: 5, ..Config::default() });
    }

    #[test]
    fn test_log_format_json() {
        let cli = Cli::parse_from(["link-probe", "--log-format", "json"]);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
