// src/lib.rs
// =============================================================================
// link-probe: checks a fixed list of URLs for reachability.
//
// Modules:
// - checker: the probing engine (single-URL prober + windowed batch runner)
// - report: the Reporter trait and the default log-line sink
// - config: run settings with defaults, TOML file and validation
// - sources: reading the URL list from arguments and files
// - cli: command-line definition for the binary
// - error: ProbeError and ConfigError
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod sources;

pub use checker::{check_links, BatchCoordinator, BatchResult, HttpProber, LinkProber, ProbeOutcome};
pub use config::Config;
pub use error::{ConfigError, ProbeError};
pub use report::{Reporter, TracingReporter};
