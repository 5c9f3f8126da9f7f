// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Build the config (defaults -> config file -> flags)
// 4. Collect the URLs and run the batch
// 5. Print results and exit with the right code
//    (0 = batch ran, 1 = unreachable links with --fail-on-unreachable,
//     2 = error)
//
// Unreachable links are a normal result, not a failure of the run, unless
// the user asks for --fail-on-unreachable.
// =============================================================================

use anyhow::{bail, Context, Result};
use clap::Parser;
use link_probe::checker::{self, BatchResult};
use link_probe::cli::{Cli, LogFormat};
use link_probe::config::Config;
use link_probe::sources;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EXIT_OK: i32 = 0;
const EXIT_UNREACHABLE: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_tracing(cli.log_format, cli.verbose) {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_ERROR);
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid settings")?;

    let urls = sources::collect_urls(&cli.urls, cli.file.as_deref())?;
    if urls.is_empty() {
        bail!("No URLs to check, pass them as arguments or with --file");
    }

    tracing::info!(
        count = urls.len(),
        concurrency = config.concurrency,
        timeout_secs = config.timeout_secs,
        "Checking links"
    );

    let results = checker::check_links(&urls, &config).await?;

    print_results(&results, cli.json)?;

    Ok(exit_code(&results, cli.fail_on_unreachable))
}

// Unreachable links only change the exit code when the user asked for it
fn exit_code(results: &BatchResult, fail_on_unreachable: bool) -> i32 {
    if fail_on_unreachable && results.reachable_count() < results.len() {
        EXIT_UNREACHABLE
    } else {
        EXIT_OK
    }
}

// Logs go to stderr so that stdout only carries the results
fn setup_tracing(format: LogFormat, verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("link_probe=debug,info")
        } else {
            EnvFilter::new("link_probe=info,warn")
        }
    });

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}

// Prints the results either as a table or JSON
fn print_results(results: &BatchResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        print_table(results);
    }
    Ok(())
}

fn print_table(results: &BatchResult) {
    println!("{:<70} {:<10}", "URL", "REACHABLE");
    println!("{}", "=".repeat(81));

    for (url, reachable) in results.iter() {
        // Truncate URL if too long for display
        let url_display = if url.chars().count() > 67 {
            format!("{}...", url.chars().take(67).collect::<String>())
        } else {
            url.to_string()
        };
        let verdict = if reachable { "yes" } else { "NO" };
        println!("{:<70} {:<10}", url_display, verdict);
    }

    println!();

    let reachable_count = results.reachable_count();
    println!("Summary:");
    println!("   Reachable:   {}", reachable_count);
    println!("   Unreachable: {}", results.len() - reachable_count);
    println!("   Total:       {}", results.len());
}
