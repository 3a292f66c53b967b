//! fetch-bench main entry point
//!
//! This is the command-line interface for the fetch-bench harness.

use anyhow::Context;
use clap::Parser;
use fetch_bench::config::{load_optional_config, validate_targets, Config};
use fetch_bench::harness::{describe_policy, Harness};
use fetch_bench::strategy::FailurePolicy;
use fetch_bench::targets::default_targets;
use fetch_bench::{HttpFetcher, ResourceFetcher};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// fetch-bench: compare sequential, async and parallel fetching
///
/// Downloads a fixed list of websites once per execution strategy and prints
/// the size of each page plus the total execution time of every run.
#[derive(Parser, Debug)]
#[command(name = "fetch-bench")]
#[command(version)]
#[command(about = "Compare sequential, async and parallel fetching", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the configured failure policy (fail-fast or collect-results)
    #[arg(long, value_name = "POLICY")]
    policy: Option<FailurePolicy>,

    /// Exit immediately instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,

    /// Show the targets and run plan without fetching anything
    #[arg(long)]
    list_targets: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_optional_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Invalid default configuration".to_string(),
    })?;
    if let Some(policy) = cli.policy {
        config.harness.failure_policy = policy;
    }
    tracing::debug!("Configuration: {:?}", config);

    let targets = default_targets();
    validate_targets(&targets).context("Invalid target list")?;

    // The blocking client has to be built outside of the runtime
    let fetcher: Arc<dyn ResourceFetcher> = Arc::new(
        HttpFetcher::from_config(&config.http).context("Failed to build HTTP client")?,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let harness = Harness::standard(targets, fetcher, runtime.handle().clone(), &config.harness);

    if cli.list_targets {
        print_plan(&harness, &config);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let records = harness.run(&mut out).context("Failed to write report")?;
    drop(out);

    let failed = records.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        tracing::warn!("{} of {} runs failed", failed, records.len());
    } else {
        tracing::info!("All {} runs completed", records.len());
    }

    if config.harness.wait_for_key && !cli.no_wait {
        wait_for_key()?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so they never interleave with the report on stdout.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fetch_bench=info,warn"),
            1 => EnvFilter::new("fetch_bench=debug,info"),
            2 => EnvFilter::new("fetch_bench=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --list-targets: shows what would be fetched and in which order
fn print_plan(harness: &Harness, config: &Config) {
    println!("=== fetch-bench Dry Run ===\n");

    println!("Targets ({}):", harness.targets().len());
    for target in harness.targets() {
        println!("  - {}", target);
    }

    println!("\nRun Plan:");
    for (index, planned) in harness.plan().iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            index + 1,
            planned.label,
            planned.strategy.name()
        );
    }

    println!("\nHTTP:");
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);
    println!("  User agent: {}", config.http.user_agent);

    println!(
        "\nFailure policy: {} ({})",
        config.harness.failure_policy,
        describe_policy(config.harness.failure_policy)
    );
}

/// Blocks until the user presses Enter
fn wait_for_key() -> io::Result<()> {
    print!("\nPress Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
