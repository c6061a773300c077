//! `apod-search`: print today's APOD record together with Custom Search
//! results for its title.
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only the
//! combined JSON record.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use apod_core::{run, CombinedRecord, Config, Outcome, Transport, UreqTransport};
use clap::Parser;
use log::{info, warn};

const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Parser, Debug)]
#[command(
    name = "apod-search",
    version,
    about = "Combine NASA's APOD with Google Custom Search results"
)]
struct Args {
    /// Load environment variables from this file instead of `./.env`.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides `http_timeout_secs`).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Print the record on one line.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match &args.env_file {
        Some(path) => load_env_file(path)?,
        None => load_optional_env_file(Path::new(DEFAULT_ENV_FILE))?,
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = io::stdout();
    execute(
        &args,
        |name| std::env::var(name).ok(),
        |config| UreqTransport::new(config.timeout),
        &mut stdout.lock(),
    )
}

/// Load an env file the user named; any failure, including absence, is fatal.
fn load_env_file(path: &Path) -> Result<()> {
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load env file {}", path.display()))
}

/// Load the default env file. Absence is fine since the variables may
/// already be exported; a file that exists but does not parse is not.
fn load_optional_env_file(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to load env file {}", path.display())),
    }
}

/// Configuration is resolved before `connect` is called, so a missing
/// credential never reaches the network layer.
fn execute<T, F, L, W>(args: &Args, lookup: L, connect: F, out: &mut W) -> Result<()>
where
    T: Transport,
    F: FnOnce(&Config) -> T,
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    let mut config = Config::from_lookup(lookup).context("invalid configuration")?;
    if let Some(secs) = args.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    info!("starting with {config:?}");

    let transport = connect(&config);
    let outcome = run(&config, &transport).context("request failed")?;
    emit(&outcome, args.compact, out)
}

/// Write the combined record to `out`. A rejected APOD record writes nothing.
fn emit<W: Write>(outcome: &Outcome, compact: bool, out: &mut W) -> Result<()> {
    match outcome {
        Outcome::Combined(record) => {
            let rendered = render(record, compact)?;
            writeln!(out, "{rendered}").context("failed to write record")?;
        }
        Outcome::ApodRejected { .. } => {
            warn!("APOD record was incomplete; nothing to print");
        }
    }
    Ok(())
}

fn render(record: &CombinedRecord, compact: bool) -> Result<String> {
    if compact {
        serde_json::to_string(record)
    } else {
        serde_json::to_string_pretty(record)
    }
    .context("failed to render record")
}
