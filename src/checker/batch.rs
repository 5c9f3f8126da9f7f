// src/checker/batch.rs
// =============================================================================
// This module drives a whole list of URLs through a prober.
//
// How it works:
// 1. Split the URL list into windows of `concurrency` URLs, in input order
// 2. Start every probe of the current window at once
// 3. Wait until ALL of them have finished
// 4. Record the verdicts, then move on to the next window
// 5. Report how long everything took
//
// So at most `concurrency` requests are ever in flight, and window N+1 never
// starts before window N has fully drained.
//
// Rust concepts:
// - Generics: BatchCoordinator works with any LinkProber
// - slice::chunks: Splits a slice into fixed-size pieces
// - join_all: Runs many futures concurrently on the current task
// =============================================================================

use crate::checker::LinkProber;
use crate::error::ConfigError;
use crate::report::Reporter;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// URL → reachable, one entry per distinct input URL.
///
/// Backed by a BTreeMap so iteration and JSON output are sorted by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchResult {
    links: BTreeMap<String, bool>,
}

impl BatchResult {
    // Later inserts for the same URL overwrite earlier ones
    fn record(&mut self, url: &str, reachable: bool) {
        self.links.insert(url.to_string(), reachable);
    }

    pub fn get(&self, url: &str) -> Option<bool> {
        self.links.get(url).copied()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.links.iter().map(|(url, reachable)| (url.as_str(), *reachable))
    }

    pub fn reachable_count(&self) -> usize {
        self.links.values().filter(|reachable| **reachable).count()
    }

    pub fn unreachable(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, reachable)| !reachable)
            .map(|(url, _)| url)
    }
}

// Entries later in the iterator overwrite earlier ones, like record()
impl FromIterator<(String, bool)> for BatchResult {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

/// Timing of a finished batch. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of URLs processed (duplicates included)
    pub total: usize,
    /// Wall-clock time of the whole batch
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Average time per URL, zero for an empty batch.
    pub fn average(&self) -> Duration {
        if self.total == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.total as f64)
    }
}

/// Runs URL lists through a prober, one window at a time.
pub struct BatchCoordinator<P> {
    prober: P,
    concurrency: usize,
    reporter: Arc<dyn Reporter>,
}

impl<P: LinkProber> BatchCoordinator<P> {
    // `concurrency` is both the window size and the in-flight bound,
    // so it has to be at least 1
    pub fn new(prober: P, concurrency: usize, reporter: Arc<dyn Reporter>) -> Result<Self, ConfigError> {
        if concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        Ok(Self {
            prober,
            concurrency,
            reporter,
        })
    }

    /// Probes every URL and returns the verdict for each.
    ///
    /// Never fails: a probe that errors is recorded as unreachable and the
    /// batch carries on. An empty list launches no probes.
    pub async fn run(&self, urls: &[String]) -> BatchResult {
        let started = Instant::now();
        let mut results = BatchResult::default();

        for (index, window) in urls.chunks(self.concurrency).enumerate() {
            tracing::debug!(window = index + 1, size = window.len(), "Starting window");

            let probes = window.iter().map(|url| self.prober.probe(url));
            let outcomes = join_all(probes).await;

            // join_all keeps input order, so outcomes line up with the window
            for (url, outcome) in window.iter().zip(outcomes) {
                results.record(url, outcome.reachable);
            }
        }

        let stats = RunStatistics {
            total: urls.len(),
            elapsed: started.elapsed(),
        };
        self.reporter.batch_completed(&stats);

        results
    }
}
