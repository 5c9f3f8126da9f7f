// src/report.rs
// =============================================================================
// The reporting sink.
//
// The prober and the batch coordinator never print anything themselves.
// They hand events to a Reporter:
// - one event per finished probe (success or not)
// - one event per probe error, with the failure category
// - one summary event when the whole batch is done
//
// TracingReporter is the default sink and writes the events as log lines
// through `tracing`. Tests plug in their own Reporter to capture events.
// =============================================================================

use crate::checker::{ProbeOutcome, RunStatistics};
use crate::error::ProbeError;

/// Receives progress events from a probing run.
///
/// Implementations must be shareable between the probes of a window,
/// hence the Send + Sync bound.
pub trait Reporter: Send + Sync {
    /// Called exactly once per probe, on every code path.
    fn probe_completed(&self, outcome: &ProbeOutcome);

    /// Called when a probe could not get a response.
    fn probe_failed(&self, url: &str, error: &ProbeError);

    /// Called once after the last window has drained.
    fn batch_completed(&self, stats: &RunStatistics);
}

/// Writes every event as a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn probe_completed(&self, outcome: &ProbeOutcome) {
        tracing::info!(
            url = %outcome.url,
            status = ?outcome.http_status,
            reachable = outcome.reachable,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "{}",
            probe_line(outcome)
        );
    }

    fn probe_failed(&self, url: &str, error: &ProbeError) {
        tracing::warn!(url = %url, error = %error, "{}", error_line(url, error));
    }

    fn batch_completed(&self, stats: &RunStatistics) {
        tracing::info!(
            total = stats.total,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "{}",
            summary_line(stats)
        );
    }
}

/// `Tested {url} with status {status|N/A} in {seconds} s.`
pub fn probe_line(outcome: &ProbeOutcome) -> String {
    let status = match outcome.http_status {
        Some(code) => code.to_string(),
        None => "N/A".to_string(),
    };
    format!(
        "Tested {} with status {} in {:.3} s.",
        outcome.url,
        status,
        outcome.elapsed.as_secs_f64()
    )
}

/// `{url}: {category}`
pub fn error_line(url: &str, error: &ProbeError) -> String {
    format!("{}: {}", url, error.log_message())
}

/// `Tested {n} links in {seconds} s, averaging {seconds/n} s per link.`
pub fn summary_line(stats: &RunStatistics) -> String {
    format!(
        "Tested {} links in {:.3} s, averaging {:.3} s per link.",
        stats.total,
        stats.elapsed.as_secs_f64(),
        stats.average().as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_probe_line_with_status() {
        let outcome = ProbeOutcome::new("https://example.com/", Some(200), Duration::from_millis(250));
        assert_eq!(
            probe_line(&outcome),
            "Tested https://example.com/ with status 200 in 0.250 s."
        );
    }

    #[test]
    fn test_probe_line_without_status() {
        let outcome = ProbeOutcome::failed("https://example.com/", Duration::from_secs(15));
        assert_eq!(
            probe_line(&outcome),
            "Tested https://example.com/ with status N/A in 15.000 s."
        );
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            error_line("https://example.com/", &ProbeError::Timeout),
            "https://example.com/: Request timed out"
        );
    }

    #[test]
    fn test_summary_line() {
        let stats = RunStatistics {
            total: 4,
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(
            summary_line(&stats),
            "Tested 4 links in 2.000 s, averaging 0.500 s per link."
        );
    }

    #[test]
    fn test_summary_line_empty_batch() {
        let stats = RunStatistics {
            total: 0,
            elapsed: Duration::from_millis(1),
        };
        assert_eq!(
            summary_line(&stats),
            "Tested 0 links in 0.001 s, averaging 0.000 s per link."
        );
    }
}
