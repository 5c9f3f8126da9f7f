// src/sources.rs
// =============================================================================
// This module collects the list of URLs to probe.
//
// URLs come from two places:
// - positional command-line arguments
// - a plain-text file, one URL per line
//
// File format:
//   # comments start with '#'
//   https://www.rust-lang.org/
//
//   https://docs.rs/            <- blank lines are ignored
//
// Only absolute http/https URLs are kept. Anything else is skipped with a
// warning, so a typo in one line doesn't stop the whole run.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

// Gathers URLs from the command line and an optional file
//
// Order is preserved: command-line URLs first, then file URLs. Duplicates
// are kept, the batch coordinator deals with them.
pub fn collect_urls(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut urls = parse_lines(args.iter().map(String::as_str));

    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL file {}", path.display()))?;
        urls.extend(parse_lines(content.lines()));
    }

    Ok(urls)
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| {
            let ok = is_http_url(line);
            if !ok {
                tracing::warn!("Skipping invalid URL: {}", line);
            }
            ok
        })
        .map(str::to_string)
        .collect()
}

// The input string itself is kept (not the normalized Url), so result keys
// match what the user wrote
fn is_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
