//! Common test utilities

use link_probe::checker::{HttpProber, ProbeOutcome, RunStatistics};
use link_probe::config::Config;
use link_probe::error::ProbeError;
use link_probe::report::{self, Reporter};
use std::sync::{Arc, Mutex};

/// Reporter that keeps every event, formatted the same way the log sink does
#[derive(Default)]
pub struct RecordingReporter {
    pub outcomes: Mutex<Vec<ProbeOutcome>>,
    pub lines: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<(String, ProbeError)>>,
    pub summaries: Mutex<Vec<RunStatistics>>,
}

impl Reporter for RecordingReporter {
    fn probe_completed(&self, outcome: &ProbeOutcome) {
        self.lines.lock().unwrap().push(report::probe_line(outcome));
        self.outcomes.lock().unwrap().push(outcome.clone());
    }

    fn probe_failed(&self, url: &str, error: &ProbeError) {
        self.lines.lock().unwrap().push(report::error_line(url, error));
        self.errors.lock().unwrap().push((url.to_string(), error.clone()));
    }

    fn batch_completed(&self, stats: &RunStatistics) {
        self.lines.lock().unwrap().push(report::summary_line(stats));
        self.summaries.lock().unwrap().push(*stats);
    }
}

/// Config with a short timeout so timeout tests finish quickly
pub fn fast_config() -> Config {
    Config {
        timeout_secs: 1,
        ..Config::default()
    }
}

/// Prober wired to a fresh recording reporter
pub fn recording_prober(config: &Config) -> (HttpProber, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let prober = HttpProber::new(config, reporter.clone()).unwrap();
    (prober, reporter)
}

/// A local URL nothing is listening on
#[allow(dead_code)]
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}
