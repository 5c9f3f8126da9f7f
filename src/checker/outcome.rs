// src/checker/outcome.rs
// =============================================================================
// What we learn from probing a single URL.
//
// HTTP status codes:
// - 200-299: Success
// - 300-399: Redirect (normally already followed by the client)
// - 400-499: Client error (404 not found, etc.)
// - 500-599: Server error
//
// Anything below 400 counts as reachable. No status at all (timeout,
// DNS failure, refused connection) counts as unreachable.
// =============================================================================

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Reachability verdict for a status code, or for no response at all.
pub fn is_reachable(http_status: Option<u16>) -> bool {
    matches!(http_status, Some(code) if code < 400)
}

/// The result of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    /// The URL that was checked
    pub url: String,
    /// Final status code, None when no response was received
    pub http_status: Option<u16>,
    /// True iff a response arrived and its status is below 400
    pub reachable: bool,
    /// Wall-clock time of the whole probe, fallback included
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl ProbeOutcome {
    /// Builds an outcome, deriving `reachable` from the status code so the
    /// two can never disagree.
    pub fn new(url: impl Into<String>, http_status: Option<u16>, elapsed: Duration) -> Self {
        Self {
            url: url.into(),
            http_status,
            reachable: is_reachable(http_status),
            elapsed,
        }
    }

    /// Outcome for a probe that never got a response.
    pub fn failed(url: impl Into<String>, elapsed: Duration) -> Self {
        Self::new(url, None, elapsed)
    }
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_millis() as u64)
}
