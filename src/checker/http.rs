// src/checker/http.rs
// =============================================================================
// This module checks if a single URL is alive by making HTTP requests.
//
// Key functionality:
// - Makes an HTTP HEAD request first (lightweight, no body download)
// - Falls back to GET only when the server answers HEAD with 405
// - Bounds every attempt with its own timeout
// - Turns every failure (timeout, DNS, TLS, refused connection) into an
//   "unreachable" outcome instead of an error
//
// Rust concepts:
// - async/await: For network I/O that doesn't block other probes
// - Drop: Runs cleanup code when a value goes out of scope, on every path
// - Traits: HttpProber is one implementation of LinkProber
// =============================================================================

use crate::checker::{LinkProber, ProbeOutcome};
use crate::config::Config;
use crate::error::{ConfigError, ProbeError};
use crate::report::Reporter;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;
use std::time::{Duration, Instant};

// Probes URLs with reqwest.
//
// One Client is shared by every probe, so connections are pooled by
// reqwest. Cloning the client is cheap (it's a reference counter inside).
pub struct HttpProber {
    client: Client,
    timeout: Duration,
    reporter: Arc<dyn Reporter>,
}

impl HttpProber {
    // Builds the prober from validated settings
    //
    // The User-Agent and the redirect policy live on the client, the
    // timeout is applied per attempt in attempt(). The window size is the
    // coordinator's business and is not checked here.
    pub fn new(config: &Config, reporter: Arc<dyn Reporter>) -> Result<Self, ConfigError> {
        config.validate_request()?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout(),
            reporter,
        })
    }

    // One request with one deadline.
    //
    // When the deadline passes, tokio::time::timeout drops the send()
    // future, which aborts the in-flight request. Only the status line is
    // read; the response (and its body for GET) is dropped right away.
    async fn attempt(&self, method: Method, url: &str) -> Result<u16, ProbeError> {
        let request = self.client.request(method, url).send();

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => Ok(response.status().as_u16()),
            Ok(Err(e)) => Err(ProbeError::from(e)),
            Err(_elapsed) => Err(ProbeError::Timeout),
        }
    }

    // HEAD first, GET only when HEAD is refused with 405.
    //
    // The GET status replaces the 405 entirely, even if it is 405 again.
    async fn resolve_status(&self, url: &str) -> Result<u16, ProbeError> {
        let status = self.attempt(Method::HEAD, url).await?;

        if status == StatusCode::METHOD_NOT_ALLOWED.as_u16() {
            tracing::debug!(url = %url, "HEAD not allowed, retrying with GET");
            return self.attempt(Method::GET, url).await;
        }

        Ok(status)
    }
}

#[async_trait]
impl LinkProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let mut clock = ProbeClock::start(url, self.reporter.as_ref());

        match self.resolve_status(url).await {
            Ok(status) => clock.record_status(status),
            Err(error) => {
                self.reporter.probe_failed(url, &error);
                clock.record_failure();
            }
        }

        clock.finish()
    }
}

// Scope guard that times one probe.
//
// The end timestamp is taken the first time the outcome is built, and the
// per-probe report is sent from Drop. That way the report goes out on every
// exit path, including when the probe future itself is dropped halfway
// (in which case the failure is reported as unknown).
struct ProbeClock<'a> {
    url: &'a str,
    reporter: &'a dyn Reporter,
    started: Instant,
    elapsed: Option<Duration>,
    status: Option<u16>,
    settled: bool,
}

impl<'a> ProbeClock<'a> {
    fn start(url: &'a str, reporter: &'a dyn Reporter) -> Self {
        Self {
            url,
            reporter,
            started: Instant::now(),
            elapsed: None,
            status: None,
            settled: false,
        }
    }

    fn record_status(&mut self, status: u16) {
        self.status = Some(status);
        self.settled = true;
    }

    fn record_failure(&mut self) {
        self.status = None;
        self.settled = true;
    }

    fn outcome(&mut self) -> ProbeOutcome {
        let started = self.started;
        let elapsed = *self.elapsed.get_or_insert_with(|| started.elapsed());
        ProbeOutcome::new(self.url, self.status, elapsed)
    }

    // Drop runs right after this returns and reports the same outcome
    fn finish(mut self) -> ProbeOutcome {
        self.outcome()
    }
}

impl Drop for ProbeClock<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.reporter.probe_failed(self.url, &ProbeError::Unknown);
        }
        let outcome = self.outcome();
        self.reporter.probe_completed(&outcome);
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HEAD before GET?
//    - HEAD asks for the headers only, the server sends no body
//    - Some servers don't implement HEAD and answer 405 Method Not Allowed
//    - Only for those we pay for a full GET
//
// 2. What does tokio::time::timeout do?
//    - Wraps a future and gives up after a duration
//    - Returns Err(Elapsed) if time ran out, Ok(value) otherwise
//    - The wrapped future is dropped, which cancels the request
//
// 3. What is Drop?
//    - A trait whose drop() method runs when a value is destroyed
//    - It runs on normal return, on early return and on cancellation
//    - Perfect for "always do this at the end" code like timing
//
// 4. Why Arc<dyn Reporter>?
//    - dyn Reporter: any type that implements the Reporter trait
//    - Arc: shared ownership, so the prober and the coordinator can both
//      hold the same reporter
// -----------------------------------------------------------------------------
