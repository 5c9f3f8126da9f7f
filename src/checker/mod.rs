// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - outcome: What a single probe produces, and the reachability rule
// - http: Probes one URL with HEAD, falling back to GET
// - batch: Runs many probes in fixed-size windows and collects verdicts
//
// This file (mod.rs) is the module root. It declares the LinkProber trait
// that ties the prober and the batch coordinator together, and re-exports
// the public API.
// =============================================================================

mod batch;
mod http;
mod outcome;

use async_trait::async_trait;

pub use batch::{BatchCoordinator, BatchResult, RunStatistics};
pub use http::HttpProber;
pub use outcome::{is_reachable, ProbeOutcome};

use crate::config::Config;
use crate::error::ConfigError;
use crate::report::{Reporter, TracingReporter};
use std::sync::Arc;

/// Checks whether one URL is reachable.
///
/// Implementations must never fail: every error becomes an outcome with
/// `reachable = false`. They also don't know about the concurrency limit,
/// that is the coordinator's job.
#[async_trait]
pub trait LinkProber: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

// Checks a list of links with the HTTP prober and log reporting
//
// This is the main entry point for link checking. It wires an HttpProber
// and a BatchCoordinator from the config and runs them.
//
// Returns an error only if the config is invalid; individual link
// failures end up as `false` in the result.
pub async fn check_links(urls: &[String], config: &Config) -> Result<BatchResult, ConfigError> {
    check_links_with(urls, config, Arc::new(TracingReporter)).await
}

// Same as check_links, with a caller-supplied reporting sink
pub async fn check_links_with(
    urls: &[String],
    config: &Config,
    reporter: Arc<dyn Reporter>,
) -> Result<BatchResult, ConfigError> {
    let prober = HttpProber::new(config, reporter.clone())?;
    let coordinator = BatchCoordinator::new(prober, config.concurrency, reporter)?;
    Ok(coordinator.run(urls).await)
}
